// Sat Oct 17 2026 - Alex

pub mod cache;
pub mod document;
pub mod source;

pub use cache::{CacheStats, DocumentCache};
pub use document::{AttributeDescriptor, ClassDescriptionDocument, ClassDescriptor};
pub use source::{DocumentSource, SdkDirectory};
