use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use contracts::enums::StatusFamily;
use contracts::shared::activity_log::ActivityLogEntry;
use contracts::shared::catalogs::CatalogsResponse;
use contracts::shared::status_catalog::StatusResolution;

use crate::shared::app_context;
use crate::shared::error::ServiceError;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub family: String,
    #[serde(default)]
    pub raw: String,
}

/// GET /api/catalogs
pub async fn get_catalogs() -> Json<CatalogsResponse> {
    Json(CatalogsResponse::build())
}

/// GET /api/status/resolve
pub async fn resolve_status(
    Query(query): Query<ResolveQuery>,
) -> Result<Json<StatusResolution>, ServiceError> {
    let family = StatusFamily::from_code(query.family.trim()).ok_or_else(|| {
        ServiceError::Validation(format!(
            "unknown status family {:?}, expected \"permission\" or \"4f\"",
            query.family
        ))
    })?;
    let resolution = app_context::get().catalog.resolve_checked(family, &query.raw);
    if !resolution.recognized && !query.raw.trim().is_empty() {
        tracing::warn!("Unrecognized {} status {:?}", family, query.raw.trim());
    }
    Ok(Json(resolution))
}

/// GET /api/activity
pub async fn recent_activity() -> Json<Vec<ActivityLogEntry>> {
    Json(app_context::get().store.current().recent_activity.clone())
}
