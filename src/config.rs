// Sat Oct 17 2026 - Alex

use crate::error::{ResolverError, ResolverResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sdk_dir: PathBuf,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub indent_size: usize,
    pub text_report: Option<PathBuf>,
    pub report_unresolved: bool,
    pub enable_progress_bars: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sdk_dir: PathBuf::from("SDK"),
            input_file: PathBuf::from("neededOffsets.json"),
            output_file: PathBuf::from("offsets.json"),
            indent_size: 4,
            text_report: None,
            report_unresolved: true,
            enable_progress_bars: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON config file. Missing keys fall back to the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ResolverResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ResolverError::from_io(path, e))?;
        serde_json::from_str(&content).map_err(|e| ResolverError::parse(path, e))
    }

    pub fn with_sdk_dir(mut self, dir: PathBuf) -> Self {
        self.sdk_dir = dir;
        self
    }

    pub fn with_input_file(mut self, input: PathBuf) -> Self {
        self.input_file = input;
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = output;
        self
    }

    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    pub fn with_text_report(mut self, path: PathBuf) -> Self {
        self.text_report = Some(path);
        self
    }

    pub fn with_report_unresolved(mut self, include: bool) -> Self {
        self.report_unresolved = include;
        self
    }

    pub fn with_progress_bars(mut self, enabled: bool) -> Self {
        self.enable_progress_bars = enabled;
        self
    }

    pub fn validate(&self) -> ResolverResult<()> {
        if self.sdk_dir.as_os_str().is_empty() {
            return Err(ResolverError::InvalidConfig("sdk_dir must not be empty".to_string()));
        }
        if self.input_file.as_os_str().is_empty() {
            return Err(ResolverError::InvalidConfig("input_file must not be empty".to_string()));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(ResolverError::InvalidConfig("output_file must not be empty".to_string()));
        }
        if self.input_file == self.output_file {
            return Err(ResolverError::InvalidConfig(
                "input_file and output_file must differ".to_string(),
            ));
        }
        if self.indent_size > 16 {
            return Err(ResolverError::InvalidConfig("indent_size must be at most 16".to_string()));
        }
        Ok(())
    }
}
