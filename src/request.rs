// Sat Oct 17 2026 - Alex

use crate::error::{ResolverError, ResolverResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Offset,
    Size,
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offset" => Ok(Operation::Offset),
            "size" => Ok(Operation::Size),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Offset => write!(f, "offset"),
            Operation::Size => write!(f, "size"),
        }
    }
}

/// One entry of the input file. `operation` stays a raw string so an
/// unknown value surfaces at resolution time as `UnsupportedOperation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    pub file: String,
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub operation: String,
}

impl LookupRequest {
    pub fn offset(file: &str, class: &str, key: &str) -> Self {
        Self {
            file: file.to_string(),
            class: class.to_string(),
            key: Some(key.to_string()),
            operation: Operation::Offset.to_string(),
        }
    }

    pub fn size(file: &str, class: &str) -> Self {
        Self {
            file: file.to_string(),
            class: class.to_string(),
            key: None,
            operation: Operation::Size.to_string(),
        }
    }

    pub fn operation(&self) -> ResolverResult<Operation> {
        self.operation
            .parse()
            .map_err(|operation| ResolverError::UnsupportedOperation {
                operation,
                class: self.class.clone(),
            })
    }

    /// `<class>.<key>` for offsets, `<class>.Size` for sizes.
    pub fn result_key(&self, operation: Operation) -> String {
        match operation {
            Operation::Offset => format!("{}.{}", self.class, self.key.as_deref().unwrap_or_default()),
            Operation::Size => format!("{}.Size", self.class),
        }
    }
}

impl fmt::Display for LookupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{} {}.{} ({})", self.operation, self.class, key, self.file),
            None => write!(f, "{} {} ({})", self.operation, self.class, self.file),
        }
    }
}

pub fn read_requests<P: AsRef<Path>>(path: P) -> ResolverResult<Vec<LookupRequest>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ResolverError::from_io(path, e))?;
    let requests: Vec<LookupRequest> =
        serde_json::from_str(&content).map_err(|e| ResolverError::parse(path, e))?;

    log::debug!("Read {} lookup requests from {}", requests.len(), path.display());
    Ok(requests)
}
