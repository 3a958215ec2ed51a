//! PostgreSQL record repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres, QueryBuilder};

use super::RecordStore;
use crate::{
    error::AppResult,
    models::record::{CreateRecord, Record, RecordFilter, UpdateRecord},
};

const RECORD_COLUMNS: &str = "id, title, author, created_at, created_by";

#[derive(Clone)]
pub struct RecordsRepository {
    pool: Pool<Postgres>,
}

impl RecordsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards so user input is matched literally
fn like_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl RecordStore for RecordsRepository {
    async fn create(&self, data: &CreateRecord) -> AppResult<Record> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, Record>(&format!(
            r#"
            INSERT INTO records (title, author, created_by)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            RECORD_COLUMNS
        ))
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.created_by)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(record)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Record>> {
        let row = sqlx::query_as::<_, Record>(&format!(
            "SELECT {} FROM records WHERE id = $1",
            RECORD_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_all(&self, skip: i64, limit: i64) -> AppResult<Vec<Record>> {
        let rows = sqlx::query_as::<_, Record>(&format!(
            "SELECT {} FROM records ORDER BY id LIMIT $1 OFFSET $2",
            RECORD_COLUMNS
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn update(&self, id: i32, data: &UpdateRecord) -> AppResult<Option<Record>> {
        if data.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut tx = self.pool.begin().await?;

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE records SET ");
        let mut sets = builder.separated(", ");
        if let Some(ref title) = data.title {
            sets.push("title = ").push_bind_unseparated(title);
        }
        if let Some(ref author) = data.author {
            sets.push("author = ").push_bind_unseparated(author);
        }
        builder
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" RETURNING ")
            .push(RECORD_COLUMNS);

        let row = builder
            .build_query_as::<Record>()
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM records WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, filter: &RecordFilter) -> AppResult<Vec<Record>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT ");
        builder.push(RECORD_COLUMNS).push(" FROM records");

        if !filter.is_empty() {
            builder.push(" WHERE ");
            let mut conditions = builder.separated(" OR ");
            if let Some(ref title) = filter.title {
                conditions
                    .push("title ILIKE ")
                    .push_bind_unseparated(like_pattern(title));
            }
            if let Some(ref author) = filter.author {
                conditions
                    .push("author ILIKE ")
                    .push_bind_unseparated(like_pattern(author));
            }
            if let Some(ref created_by) = filter.created_by {
                conditions
                    .push("created_by = ")
                    .push_bind_unseparated(created_by);
            }
        }
        builder.push(" ORDER BY id");

        let rows = builder
            .build_query_as::<Record>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
