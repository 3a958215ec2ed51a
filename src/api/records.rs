//! Record endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppError, AppResult},
    models::record::{CreateRecord, Record, RecordQuery, UpdateRecord},
    AppState,
};

use super::extract::{AppPath, ValidatedJson, ValidatedQuery};

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Record {} not found", id))
}

/// List records with optional filters and pagination
#[utoipa::path(
    get,
    path = "/records",
    tag = "records",
    params(RecordQuery),
    responses(
        (status = 200, description = "List of records", body = Vec<Record>),
        (status = 422, description = "Invalid query parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_records(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<RecordQuery>,
) -> AppResult<Json<Vec<Record>>> {
    let records = state
        .services
        .records
        .search_records(&query.filter(), query.skip, query.limit)
        .await?;
    Ok(Json(records))
}

/// Get a record by ID
#[utoipa::path(
    get,
    path = "/records/{id}",
    tag = "records",
    params(("id" = i32, Path, description = "Record ID")),
    responses(
        (status = 200, description = "Record details", body = Record),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_record(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<Record>> {
    let record = state
        .services
        .records
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(record))
}

/// Create a new record
#[utoipa::path(
    post,
    path = "/records",
    tag = "records",
    request_body = CreateRecord,
    responses(
        (status = 201, description = "Record created", body = Record),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_record(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateRecord>,
) -> AppResult<(StatusCode, Json<Record>)> {
    let created = state.services.records.create(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a record (only provided fields)
#[utoipa::path(
    put,
    path = "/records/{id}",
    tag = "records",
    params(("id" = i32, Path, description = "Record ID")),
    request_body = UpdateRecord,
    responses(
        (status = 200, description = "Record updated", body = Record),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_record(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    ValidatedJson(data): ValidatedJson<UpdateRecord>,
) -> AppResult<Json<Record>> {
    let updated = state
        .services
        .records
        .update(id, &data)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(updated))
}

/// Delete a record
#[utoipa::path(
    delete,
    path = "/records/{id}",
    tag = "records",
    params(("id" = i32, Path, description = "Record ID")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_record(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<StatusCode> {
    if !state.services.records.delete(id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
