// Sat Oct 17 2026 - Alex

use crate::config::Config;
use crate::error::{ResolverError, ResolverResult};
use crate::output::Resolution;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Markdown,
}

impl ReportFormat {
    /// `.md`/`.markdown` get markdown, anything else plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown") => {
                ReportFormat::Markdown
            }
            _ => ReportFormat::Text,
        }
    }
}

pub struct ReportGenerator {
    format: ReportFormat,
    include_unresolved: bool,
}

impl ReportGenerator {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            include_unresolved: true,
        }
    }

    /// Format picked from the report path, unresolved section per `report_unresolved`.
    pub fn from_config(config: &Config, path: &Path) -> Self {
        Self::new(ReportFormat::from_path(path)).with_unresolved(config.report_unresolved)
    }

    pub fn with_unresolved(mut self, include: bool) -> Self {
        self.include_unresolved = include;
        self
    }

    pub fn generate(&self, resolution: &Resolution) -> String {
        match self.format {
            ReportFormat::Text => self.generate_text(resolution),
            ReportFormat::Markdown => self.generate_markdown(resolution),
        }
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, resolution: &Resolution, path: P) -> ResolverResult<()> {
        let path = path.as_ref();
        fs::write(path, self.generate(resolution)).map_err(|e| ResolverError::from_io(path, e))
    }

    fn generate_text(&self, resolution: &Resolution) -> String {
        let mut text = String::new();
        text.push_str("SDK Offset Report\n");
        text.push_str("=================\n\n");

        let title = format!("Resolved ({}):", resolution.resolved_count());
        text.push_str(&format!("{}\n{}\n", title, "-".repeat(title.len())));
        for (key, value) in resolution.table.iter() {
            text.push_str(&format!("  {}: 0x{:x} ({})\n", key, value, value));
        }

        if self.include_unresolved {
            let title = format!("Unresolved ({}):", resolution.unresolved_count());
            text.push_str(&format!("\n{}\n{}\n", title, "-".repeat(title.len())));
            for request in &resolution.unresolved {
                text.push_str(&format!("  {}\n", request));
            }
        }

        text
    }

    fn generate_markdown(&self, resolution: &Resolution) -> String {
        let mut md = String::new();
        md.push_str("# SDK Offset Report\n\n");
        md.push_str("## Summary\n\n");
        md.push_str("| Category | Count |\n");
        md.push_str("|----------|-------|\n");
        md.push_str(&format!("| Resolved | {} |\n", resolution.resolved_count()));
        md.push_str(&format!("| Unresolved | {} |\n\n", resolution.unresolved_count()));

        md.push_str("## Resolved\n\n");
        md.push_str("| Key | Hex | Decimal |\n");
        md.push_str("|-----|-----|---------|\n");
        for (key, value) in resolution.table.iter() {
            md.push_str(&format!("| {} | `0x{:x}` | {} |\n", key, value, value));
        }

        if self.include_unresolved && !resolution.unresolved.is_empty() {
            md.push_str("\n## Unresolved\n\n");
            md.push_str("| File | Class | Key | Operation |\n");
            md.push_str("|------|-------|-----|-----------|\n");
            for request in &resolution.unresolved {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    request.file,
                    request.class,
                    request.key.as_deref().unwrap_or("-"),
                    request.operation
                ));
            }
        }

        md
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(ReportFormat::Text)
    }
}
