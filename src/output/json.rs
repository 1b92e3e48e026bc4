// Sat Oct 17 2026 - Alex

use crate::error::{ResolverError, ResolverResult};
use crate::output::ResultTable;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

pub struct JsonWriter {
    indent_size: usize,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { indent_size: 4 }
    }

    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    pub fn serialize(&self, table: &ResultTable) -> ResolverResult<String> {
        let indent = " ".repeat(self.indent_size);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());

        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        table
            .serialize(&mut serializer)
            .map_err(|e| ResolverError::Serialization(e.to_string()))?;

        String::from_utf8(buffer).map_err(|e| ResolverError::Serialization(e.to_string()))
    }

    /// Serializes fully before touching the file, then writes it in one go.
    pub fn write_to_file<P: AsRef<Path>>(&self, table: &ResultTable, path: P) -> ResolverResult<()> {
        let path = path.as_ref();
        let json = self.serialize(table)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ResolverError::from_io(parent, e))?;
        }

        fs::write(path, json).map_err(|e| ResolverError::from_io(path, e))?;
        log::debug!("Wrote {} entries to {}", table.len(), path.display());
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
