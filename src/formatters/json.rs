use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::core::Resolution;

#[derive(Debug, Serialize)]
struct Report<'a> {
    entry_class: &'a str,
    class_count: usize,
    classes: Vec<ReportEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ReportEntry<'a> {
    id: &'a str,
    /// Resolved project file; absent for external or unresolvable leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a PathBuf>,
}

/// Structured report carrying the resolved file path of each
/// project-internal class alongside the plain leaves.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn render(&self, resolution: &Resolution) -> Result<String> {
        let report = Report {
            entry_class: &resolution.entry_class,
            class_count: resolution.len(),
            classes: resolution
                .modules
                .iter()
                .map(|(id, path)| ReportEntry {
                    id,
                    path: path.as_ref(),
                })
                .collect(),
        };
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(rendered)
    }

    pub fn format_to_file(&self, resolution: &Resolution, output: &Path) -> Result<()> {
        fs::write(output, self.render(resolution)?)?;
        Ok(())
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
