// Sat Oct 17 2026 - Alex

use crate::error::{ResolverError, ResolverResult};
use crate::sdk::ClassDescriptionDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Where SDK documents come from, keyed by logical file name (no extension).
pub trait DocumentSource {
    fn locate(&self, source_id: &str) -> PathBuf;
    fn load(&self, source_id: &str) -> ResolverResult<ClassDescriptionDocument>;
}

/// Reads `<root>/<source_id>.json` from disk.
#[derive(Debug, Clone)]
pub struct SdkDirectory {
    root: PathBuf,
}

impl SdkDirectory {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for SdkDirectory {
    fn default() -> Self {
        Self::new("SDK")
    }
}

impl DocumentSource for SdkDirectory {
    fn locate(&self, source_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", source_id))
    }

    fn load(&self, source_id: &str) -> ResolverResult<ClassDescriptionDocument> {
        let path = self.locate(source_id);
        let content = fs::read_to_string(&path).map_err(|e| ResolverError::from_io(&path, e))?;
        serde_json::from_str(&content).map_err(|e| ResolverError::parse(&path, e))
    }
}
