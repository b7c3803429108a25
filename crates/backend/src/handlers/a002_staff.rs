use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use contracts::domain::a002_staff::aggregate::{StaffDto, StaffRecord};
use contracts::system::auth::{UserContext, UserRequest};

use crate::domain::a002_staff::service;
use crate::shared::app_context;
use crate::shared::error::ServiceError;

#[derive(Debug, Default, Deserialize)]
pub struct ProposerQuery {
    pub department: Option<String>,
}

/// GET /api/staff
pub async fn list_all() -> Json<Vec<StaffRecord>> {
    Json(service::list_all(app_context::get()))
}

/// GET /api/staff/proposers
pub async fn list_proposers(Query(query): Query<ProposerQuery>) -> Json<Vec<String>> {
    Json(service::list_proposers(
        app_context::get(),
        query.department.as_deref(),
    ))
}

/// POST /api/staff
pub async fn save(
    Json(request): Json<UserRequest<StaffDto>>,
) -> Result<Json<Vec<StaffRecord>>, ServiceError> {
    let snapshot = service::save(app_context::get(), request.user.as_ref(), request.payload).await?;
    Ok(Json(snapshot.staff.clone()))
}

/// DELETE /api/staff/:id
pub async fn delete(
    Path(id): Path<String>,
    Json(request): Json<UserContext>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let snapshot = service::delete(app_context::get(), request.user.as_ref(), &id).await?;
    Ok(Json(json!({ "success": true, "total_staff": snapshot.staff.len() })))
}
