use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use classreach::formatters::{JsonFormatter, TextFormatter};
use classreach::{assets, ReachabilityResolver};

#[derive(Debug, Parser)]
#[command(
    name = "classreach",
    version = "0.1.0",
    author = "classreach developers",
    about = "Transitive Java class reachability analysis for server build pruning"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve every class reachable from an entry-point source file
    Resolve {
        /// Project root to index
        #[arg(short, long, value_name = "DIR")]
        root: PathBuf,

        /// Entry-point Java source file
        #[arg(short, long, value_name = "FILE")]
        entry: PathBuf,

        /// Output file; prints to stdout when omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_name = "FORMAT", value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List deployed assets never referenced from the sources
    Assets {
        /// Directory holding the packaged assets
        #[arg(short, long, value_name = "DIR")]
        assets_dir: PathBuf,

        /// Source directory to scan for asset references
        #[arg(short, long, value_name = "DIR")]
        source_dir: PathBuf,

        /// Output file for the unused-asset list
        #[arg(
            short,
            long,
            value_name = "FILE",
            default_value = "unused_assets.txt"
        )]
        output: PathBuf,
    },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve {
            root,
            entry,
            output,
            format,
        } => resolve(root, entry, output, format),
        Command::Assets {
            assets_dir,
            source_dir,
            output,
        } => scan_assets(assets_dir, source_dir, output),
    }
}

fn resolve(
    root: PathBuf,
    entry: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let start = Instant::now();

    println!("classreach - Java class reachability");
    println!("Root: {}", root.display());
    println!("Entry: {}", entry.display());
    println!("Format: {}", format.as_str());

    let resolver = ReachabilityResolver::new();
    let resolution = resolver
        .resolve(&entry, &root)
        .with_context(|| format!("resolving {}", entry.display()))?;

    println!(
        "Resolved {} classes from {} in {:.2}s",
        resolution.len(),
        resolution.entry_class,
        start.elapsed().as_secs_f64()
    );

    match (&output, format) {
        (Some(path), OutputFormat::Text) => {
            TextFormatter::new().format_to_file(&resolution, path)?;
            println!("Class list written to {}", path.display());
        }
        (Some(path), OutputFormat::Json) => {
            JsonFormatter::new().format_to_file(&resolution, path)?;
            println!("Report written to {}", path.display());
        }
        (None, OutputFormat::Text) => {
            println!("Classes required for the entry module:");
            print!("{}", TextFormatter::new().render(&resolution));
        }
        (None, OutputFormat::Json) => {
            println!("{}", JsonFormatter::new().render(&resolution)?);
        }
    }

    Ok(())
}

fn scan_assets(assets_dir: PathBuf, source_dir: PathBuf, output: PathBuf) -> Result<()> {
    let start = Instant::now();

    let unused = assets::find_unused_assets(&assets_dir, &source_dir)?;
    assets::write_report(&unused, &output)?;

    println!(
        "{} unused assets listed in {} ({:.2}s)",
        unused.len(),
        output.display(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
