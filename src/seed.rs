//! Sample catalog for development databases

use crate::{error::AppResult, models::record::CreateRecord, services::records::RecordService};

const SEED_CREATOR: &str = "System";

/// (title, author)
const SAMPLE_BOOKS: &[(&str, &str)] = &[
    ("Clean Code: A Handbook of Agile Software Craftsmanship", "Robert C. Martin"),
    ("Design Patterns: Elements of Reusable Object-Oriented Software", "Gang of Four"),
    ("The Pragmatic Programmer", "David Thomas, Andrew Hunt"),
    ("Refactoring: Improving the Design of Existing Code", "Martin Fowler"),
    ("Domain-Driven Design: Tackling Complexity in the Heart of Software", "Eric Evans"),
    ("Patterns of Enterprise Application Architecture", "Martin Fowler"),
    ("Building Microservices: Designing Fine-Grained Systems", "Sam Newman"),
    ("You Don't Know JS: Scope & Closures", "Kyle Simpson"),
];

pub fn sample_records() -> Vec<CreateRecord> {
    SAMPLE_BOOKS
        .iter()
        .map(|(title, author)| CreateRecord {
            title: title.to_string(),
            author: author.to_string(),
            created_by: SEED_CREATOR.to_string(),
        })
        .collect()
}

/// Insert the sample catalog if the store holds no records.
/// Returns the number of records inserted.
pub async fn seed_if_empty(records: &RecordService) -> AppResult<usize> {
    if !records.list_all(0, 1).await?.is_empty() {
        tracing::info!("Record store already populated, skipping seed");
        return Ok(0);
    }

    let samples = sample_records();
    for sample in &samples {
        records.create(sample).await?;
    }
    tracing::info!("Seeded {} sample records", samples.len());
    Ok(samples.len())
}
