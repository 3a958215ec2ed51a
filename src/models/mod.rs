//! Data models for Bookshelf

pub mod record;

// Re-export commonly used types
pub use record::{CreateRecord, Record, RecordFilter, RecordQuery, UpdateRecord};
