// Sat Oct 17 2026 - Alex

pub mod config;
pub mod error;
pub mod sdk;
pub mod request;
pub mod resolver;
pub mod output;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use error::{ResolverError, ResolverResult};
pub use sdk::{ClassDescriptionDocument, DocumentCache, DocumentSource, SdkDirectory};
pub use request::{LookupRequest, Operation};
pub use resolver::OffsetResolver;
pub use output::{JsonWriter, Resolution, ResultTable};
