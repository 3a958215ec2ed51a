//! Book record model and request/response schemas.
//!
//! The storage row, the create/update payloads and the list query each have
//! their own shape. Only `title` and `author` are mutable after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_LIMIT: i64 = 100;

/// Book record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Store-assigned identifier, never reused
    pub id: i32,
    pub title: String,
    pub author: String,
    /// Creation timestamp assigned by the store
    pub created_at: DateTime<Utc>,
    /// User or process that created the record
    pub created_by: String,
}

/// Create record request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecord {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "Author must be between 1 and 100 characters"))]
    pub author: String,
    #[validate(length(min = 1, max = 50, message = "createdBy must be between 1 and 50 characters"))]
    pub created_by: String,
}

/// Update record request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Author must be between 1 and 100 characters"))]
    pub author: Option<String>,
}

impl UpdateRecord {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }
}

/// Search criteria. `title` and `author` match case-insensitive substrings,
/// `created_by` matches exactly; supplied criteria are OR-ed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub created_by: Option<String>,
}

impl RecordFilter {
    /// Build a filter, treating empty strings as "not supplied"
    pub fn new(title: Option<String>, author: Option<String>, created_by: Option<String>) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            title: non_empty(title),
            author: non_empty(author),
            created_by: non_empty(created_by),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.created_by.is_none()
    }

    /// Whether `record` satisfies any supplied criterion
    pub fn matches(&self, record: &Record) -> bool {
        let title = self
            .title
            .as_deref()
            .is_some_and(|t| contains_ignore_case(&record.title, t));
        let author = self
            .author
            .as_deref()
            .is_some_and(|a| contains_ignore_case(&record.author, a));
        let created_by = self
            .created_by
            .as_deref()
            .is_some_and(|c| record.created_by == c);

        title || author || created_by
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// List query parameters
#[derive(Debug, Clone, Deserialize, Validate, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RecordQuery {
    /// Number of records to skip (default: 0)
    #[serde(default)]
    #[validate(range(min = 0, message = "skip must be greater than or equal to 0"))]
    pub skip: i64,
    /// Maximum number of records to return (default: 100, max: 1000)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: i64,
    /// Filter by title (partial, case-insensitive)
    pub title: Option<String>,
    /// Filter by author (partial, case-insensitive)
    pub author: Option<String>,
    /// Filter by creator (exact)
    pub created_by: Option<String>,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
            title: None,
            author: None,
            created_by: None,
        }
    }
}

impl RecordQuery {
    pub fn filter(&self) -> RecordFilter {
        RecordFilter::new(
            self.title.clone(),
            self.author.clone(),
            self.created_by.clone(),
        )
    }
}
