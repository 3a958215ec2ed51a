//! Repository layer for record storage
//!
//! [`RecordStore`] is the only boundary that knows how records are persisted.
//! `records` talks to PostgreSQL, `memory` keeps everything in-process.

pub mod memory;
pub mod records;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::record::{CreateRecord, Record, RecordFilter, UpdateRecord},
};

pub use memory::MemoryRecordsRepository;
pub use records::RecordsRepository;

/// Storage operations on book records.
///
/// Absence is reported as `None`/`false`, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a new record; the store assigns `id` and `created_at`
    async fn create(&self, data: &CreateRecord) -> AppResult<Record>;

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Record>>;

    /// Records in primary-key order
    async fn list_all(&self, skip: i64, limit: i64) -> AppResult<Vec<Record>>;

    /// Apply only the fields present in `data`
    async fn update(&self, id: i32, data: &UpdateRecord) -> AppResult<Option<Record>>;

    /// Returns whether a record was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Records matching any supplied criterion, unbounded, in primary-key order.
    /// An empty filter matches every record.
    async fn search(&self, filter: &RecordFilter) -> AppResult<Vec<Record>>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}
