use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::core::Resolution;

/// Plain list output: one module id per line, lexicographic order.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, resolution: &Resolution) -> String {
        let mut out = String::new();
        for id in resolution.ids() {
            out.push_str(id);
            out.push('\n');
        }
        out
    }

    pub fn format_to_file(&self, resolution: &Resolution, output: &Path) -> Result<()> {
        fs::write(output, self.render(resolution))?;
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
