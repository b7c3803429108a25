use axum::Json;

use contracts::system::auth::{LoginRequest, User};

use crate::shared::app_context;
use crate::shared::error::ServiceError;
use crate::system::auth::service;

/// POST /api/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<User>, ServiceError> {
    service::login(app_context::get(), request).await.map(Json)
}
