use axum::Json;

use contracts::system::auth::UserRequest;
use contracts::usecases::u501_import_documents::{
    ImportFromJsonRequest, ImportFromSheetRequest, ImportResponse,
};

use crate::shared::app_context;
use crate::shared::error::ServiceError;
use crate::usecases::u501_import_documents::ImportExecutor;

/// POST /api/u501/import/sheet
pub async fn import_from_sheet(
    Json(request): Json<UserRequest<ImportFromSheetRequest>>,
) -> Result<Json<ImportResponse>, ServiceError> {
    let executor = ImportExecutor::new(app_context::get());
    let response = executor
        .import_from_sheet(request.user.as_ref(), request.payload)
        .await?;
    Ok(Json(response))
}

/// POST /api/u501/import/json
pub async fn import_from_json(
    Json(request): Json<UserRequest<ImportFromJsonRequest>>,
) -> Result<Json<ImportResponse>, ServiceError> {
    let executor = ImportExecutor::new(app_context::get());
    let response = executor
        .import_from_json(request.user.as_ref(), request.payload)
        .await?;
    Ok(Json(response))
}
