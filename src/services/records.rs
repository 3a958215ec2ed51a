//! Record service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::record::{CreateRecord, Record, RecordFilter, UpdateRecord},
    repository::RecordStore,
};

#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn RecordStore>,
}

impl RecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, data: &CreateRecord) -> AppResult<Record> {
        let record = self.store.create(data).await?;
        tracing::info!("Created record id={} by {}", record.id, record.created_by);
        Ok(record)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Record>> {
        self.store.get_by_id(id).await
    }

    pub async fn list_all(&self, skip: i64, limit: i64) -> AppResult<Vec<Record>> {
        self.store.list_all(skip, limit).await
    }

    pub async fn update(&self, id: i32, data: &UpdateRecord) -> AppResult<Option<Record>> {
        let record = self.store.update(id, data).await?;
        if record.is_some() {
            tracing::info!("Updated record id={}", id);
        }
        Ok(record)
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!("Deleted record id={}", id);
        }
        Ok(deleted)
    }

    pub async fn search(&self, filter: &RecordFilter) -> AppResult<Vec<Record>> {
        self.store.search(filter).await
    }

    /// List records, filtered when any criterion is supplied.
    ///
    /// Filtered results are fetched in full and sliced here; unfiltered
    /// listing pushes `skip`/`limit` down to the store.
    pub async fn search_records(
        &self,
        filter: &RecordFilter,
        skip: i64,
        limit: i64,
    ) -> AppResult<Vec<Record>> {
        if filter.is_empty() {
            return self.list_all(skip, limit).await;
        }

        let results = self.search(filter).await?;
        tracing::debug!("Search {:?} matched {} records", filter, results.len());

        let skip = usize::try_from(skip).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(results.into_iter().skip(skip).take(limit).collect())
    }

    /// Check store connectivity
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
