//! In-process record repository
//!
//! Mirrors the PostgreSQL schema constraints so that both stores report the
//! same errors for the same input.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::RecordStore;
use crate::{
    error::{AppError, AppResult},
    models::record::{CreateRecord, Record, RecordFilter, UpdateRecord},
};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Record>,
    last_id: i32,
}

#[derive(Default)]
pub struct MemoryRecordsRepository {
    table: RwLock<Table>,
}

impl MemoryRecordsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Same bounds as the CHECK constraints on the `records` table
fn check_column(column: &str, value: &str, max_chars: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len == 0 || len > max_chars {
        return Err(AppError::ConstraintViolation(format!(
            "{} must be between 1 and {} characters, got {}",
            column, max_chars, len
        )));
    }
    Ok(())
}

#[async_trait]
impl RecordStore for MemoryRecordsRepository {
    async fn create(&self, data: &CreateRecord) -> AppResult<Record> {
        check_column("title", &data.title, 200)?;
        check_column("author", &data.author, 100)?;
        check_column("created_by", &data.created_by, 50)?;

        let mut table = self.table.write().await;
        table.last_id += 1;
        let record = Record {
            id: table.last_id,
            title: data.title.clone(),
            author: data.author.clone(),
            created_at: Utc::now(),
            created_by: data.created_by.clone(),
        };
        table.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Record>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list_all(&self, skip: i64, limit: i64) -> AppResult<Vec<Record>> {
        let skip = usize::try_from(skip).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        let table = self.table.read().await;
        Ok(table.rows.values().skip(skip).take(limit).cloned().collect())
    }

    async fn update(&self, id: i32, data: &UpdateRecord) -> AppResult<Option<Record>> {
        if let Some(ref title) = data.title {
            check_column("title", title, 200)?;
        }
        if let Some(ref author) = data.author {
            check_column("author", author, 100)?;
        }

        let mut table = self.table.write().await;
        let Some(record) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(ref title) = data.title {
            record.title = title.clone();
        }
        if let Some(ref author) = data.author {
            record.author = author.clone();
        }
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn search(&self, filter: &RecordFilter) -> AppResult<Vec<Record>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|r| filter.is_empty() || filter.matches(r))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
