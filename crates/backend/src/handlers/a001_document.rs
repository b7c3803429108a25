use axum::extract::{Path, Query};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use contracts::domain::a001_document::aggregate::{DocumentDto, DocumentRecord, DocumentStatusUpdate};
use contracts::shared::document_filter::{DocumentPage, FilterCriteria};
use contracts::system::auth::{UserContext, UserRequest};

use crate::domain::a001_document::service;
use crate::shared::app_context;
use crate::shared::error::ServiceError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// GET /api/documents
pub async fn list_paginated(
    Query(criteria): Query<FilterCriteria>,
    Query(paging): Query<PageQuery>,
) -> Json<DocumentPage> {
    Json(service::list_page(
        app_context::get(),
        &criteria,
        paging.page,
        paging.page_size,
    ))
}

/// GET /api/documents/:doc_number
pub async fn get_by_number(
    Path(doc_number): Path<String>,
) -> Result<Json<DocumentRecord>, ServiceError> {
    service::get_by_number(app_context::get(), &doc_number).map(Json)
}

/// POST /api/documents
pub async fn save(
    Json(request): Json<UserRequest<DocumentDto>>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let snapshot = service::save(app_context::get(), request.user.as_ref(), request.payload).await?;
    Ok(Json(json!({ "success": true, "total_documents": snapshot.documents.len() })))
}

/// POST /api/documents/:doc_number/status
pub async fn update_status(
    Path(doc_number): Path<String>,
    Json(request): Json<UserRequest<DocumentStatusUpdate>>,
) -> Result<Json<DocumentRecord>, ServiceError> {
    let ctx = app_context::get();
    let snapshot = service::update_status(
        ctx,
        request.user.as_ref(),
        &doc_number,
        &request.payload.new_status,
    )
    .await?;
    snapshot
        .find_document(&doc_number)
        .cloned()
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("document {}", doc_number)))
}

/// DELETE /api/documents/:doc_number
pub async fn delete(
    Path(doc_number): Path<String>,
    Json(request): Json<UserContext>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let snapshot = service::delete(app_context::get(), request.user.as_ref(), &doc_number).await?;
    Ok(Json(json!({ "success": true, "total_documents": snapshot.documents.len() })))
}

/// GET /api/documents/export.csv
pub async fn export_csv(Query(criteria): Query<FilterCriteria>) -> Result<Response, ServiceError> {
    let body = service::export_csv(app_context::get(), &criteria)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"documents.csv\""),
        ],
        body,
    )
        .into_response())
}

/// GET /api/documents/print
pub async fn print(Query(criteria): Query<FilterCriteria>) -> Html<String> {
    Html(service::export_print_html(app_context::get(), &criteria))
}

/// POST /api/documents/export-sheet
pub async fn export_to_sheet(
    Json(request): Json<UserRequest<FilterCriteria>>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let url =
        service::export_to_sheet(app_context::get(), request.user.as_ref(), &request.payload)
            .await?;
    Ok(Json(json!({ "success": true, "url": url })))
}

/// POST /api/refresh
pub async fn refresh() -> Result<Json<serde_json::Value>, ServiceError> {
    let snapshot = service::refresh(app_context::get()).await?;
    Ok(Json(json!({
        "success": true,
        "documents": snapshot.documents.len(),
        "staff": snapshot.staff.len(),
        "updated_at": snapshot.updated_at,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;

    #[test]
    fn test_page_query_uses_camel_case() {
        let uri: Uri = "/api/documents?monthFilter=2024-01&page=2&pageSize=5"
            .parse()
            .unwrap();
        let Query(paging) = Query::<PageQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(paging.page, Some(2));
        assert_eq!(paging.page_size, Some(5));

        let Query(criteria) = Query::<FilterCriteria>::try_from_uri(&uri).unwrap();
        assert_eq!(criteria.month_filter, "2024-01");
    }
}
