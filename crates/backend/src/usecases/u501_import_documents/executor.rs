use serde_json::json;

use contracts::system::auth::User;
use contracts::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use contracts::usecases::u501_import_documents::{
    ImportDocuments, ImportFromJsonRequest, ImportFromSheetRequest, ImportResponse, ImportResult,
};

use crate::domain::a001_document::service as document_service;
use crate::shared::app_context::AppContext;
use crate::shared::error::ServiceError;
use crate::shared::remote::RemoteAction;
use crate::system::auth::guard;

/// Executor для UseCase импорта документов.
///
/// Строки разбирает внешний сервис; здесь только проверка входа, передача
/// и замена снимка документов по успешному результату.
pub struct ImportExecutor<'a> {
    ctx: &'a AppContext,
}

impl<'a> ImportExecutor<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self { ctx }
    }

    pub async fn import_from_sheet(
        &self,
        user: Option<&User>,
        request: ImportFromSheetRequest,
    ) -> Result<ImportResponse, ServiceError> {
        let user = guard::require_manager(user)?;
        let url = validate_sheet_url(&request.url)?;

        tracing::info!(
            "{}: importing from sheet {} by '{}'",
            ImportDocuments::full_name(),
            url,
            user.username
        );
        self.run(RemoteAction::ImportFromSheet, json!({ "url": url }), user)
            .await
    }

    pub async fn import_from_json(
        &self,
        user: Option<&User>,
        request: ImportFromJsonRequest,
    ) -> Result<ImportResponse, ServiceError> {
        let user = guard::require_manager(user)?;
        let rows = validate_json_rows(&request.json_data)?;

        tracing::info!(
            "{}: importing {} JSON rows by '{}'",
            ImportDocuments::full_name(),
            rows,
            user.username
        );
        self.run(
            RemoteAction::ImportFromJson,
            json!({ "jsonData": request.json_data }),
            user,
        )
        .await
    }

    async fn run(
        &self,
        action: RemoteAction,
        payload: serde_json::Value,
        user: &User,
    ) -> Result<ImportResponse, ServiceError> {
        let reply = self.ctx.remote.call(action, payload, Some(user)).await?;
        let result: ImportResult = reply.decode()?;

        if !result.success {
            tracing::warn!(
                "{} rejected by external service with {} error(s)",
                action,
                result.errors.len()
            );
            return Ok(ImportResponse {
                success: false,
                imported_count: 0,
                errors: result.errors,
                total_documents: self.ctx.store.current().documents.len(),
            });
        }

        let snapshot = document_service::apply_documents(self.ctx, result.updated_documents);
        tracing::info!(
            "{} imported {} document(s), {} row error(s)",
            action,
            result.imported_count,
            result.errors.len()
        );
        Ok(ImportResponse {
            success: true,
            imported_count: result.imported_count,
            errors: result.errors,
            total_documents: snapshot.documents.len(),
        })
    }
}

/// Ссылка на таблицу должна быть абсолютным http(s) URL
fn validate_sheet_url(raw: &str) -> UseCaseResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UseCaseError::validation("sheet url is required"));
    }
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| UseCaseError::validation("invalid sheet url").with_details(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(UseCaseError::validation("sheet url must be an http(s) address")
            .with_details(trimmed.to_string()));
    }
    Ok(url.to_string())
}

/// Непустой массив объектов; возвращает число строк
fn validate_json_rows(data: &serde_json::Value) -> UseCaseResult<usize> {
    let rows = data
        .as_array()
        .ok_or_else(|| UseCaseError::validation("jsonData must be an array"))?;
    if rows.is_empty() {
        return Err(UseCaseError::validation("jsonData is empty"));
    }
    if let Some(index) = rows.iter().position(|row| !row.is_object()) {
        return Err(UseCaseError::validation("every row must be an object")
            .with_details(format!("row {}", index + 1)));
    }
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::app_context::testing::context_with;
    use crate::shared::remote::fake::FakeRemote;
    use crate::shared::remote::RemoteError;
    use axum::http::StatusCode;
    use contracts::enums::UserRole;
    use std::sync::Arc;

    fn admin() -> User {
        User {
            username: "admin".into(),
            full_name: "ผู้ดูแล".into(),
            role: UserRole::Admin,
        }
    }

    #[test]
    fn test_sheet_url_validation() {
        assert!(validate_sheet_url("https://docs.google.com/spreadsheets/d/abc/edit").is_ok());
        assert!(validate_sheet_url("  ").unwrap_err().is_validation());
        assert!(validate_sheet_url("docs.google.com/x").is_err());
        assert!(validate_sheet_url("ftp://example.com/sheet").is_err());
    }

    #[test]
    fn test_json_rows_validation() {
        assert_eq!(validate_json_rows(&json!([{"objective": "a"}, {}])).unwrap(), 2);
        assert!(validate_json_rows(&json!([])).is_err());
        assert!(validate_json_rows(&json!({"objective": "a"})).is_err());
        let err = validate_json_rows(&json!([{}, 5])).unwrap_err();
        assert_eq!(err.details.as_deref(), Some("row 2"));
    }

    #[tokio::test]
    async fn test_successful_import_replaces_documents() {
        let remote = Arc::new(FakeRemote::new().reply(
            RemoteAction::ImportFromJson,
            json!({
                "success": true,
                "importedCount": 2,
                "errors": [],
                "updatedDocuments": [
                    {"doc_number": "I-1", "objective": "a"},
                    {"doc_number": "I-2", "objective": "b"}
                ]
            }),
        ));
        let ctx = context_with(remote.clone());
        let request = ImportFromJsonRequest {
            json_data: json!([{"objective": "a"}, {"objective": "b"}]),
        };

        let response = ImportExecutor::new(&ctx)
            .import_from_json(Some(&admin()), request)
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.imported_count, 2);
        assert_eq!(response.total_documents, 2);
        assert!(ctx.store.current().find_document("I-2").is_some());
        assert_eq!(remote.calls()[0].payload["jsonData"][1]["objective"], "b");
    }

    #[tokio::test]
    async fn test_failed_import_keeps_snapshot() {
        let remote = Arc::new(FakeRemote::new().reply(
            RemoteAction::ImportFromSheet,
            json!({
                "success": false,
                "importedCount": 0,
                "errors": [{"row": 3, "message": "missing objective"}],
                "updatedDocuments": []
            }),
        ));
        let ctx = context_with(remote);
        ctx.store
            .replace_documents(serde_json::from_value(json!([{"doc_number": "D-1"}])).unwrap());

        let request = ImportFromSheetRequest {
            url: "https://docs.google.com/spreadsheets/d/abc".into(),
        };
        let response = ImportExecutor::new(&ctx)
            .import_from_sheet(Some(&admin()), request)
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.errors[0].row, Some(3));
        assert_eq!(response.total_documents, 1);
    }

    #[tokio::test]
    async fn test_visitor_cannot_import() {
        let remote = Arc::new(FakeRemote::new());
        let ctx = context_with(remote.clone());
        let request = ImportFromSheetRequest {
            url: "https://docs.google.com/spreadsheets/d/abc".into(),
        };
        let err = ImportExecutor::new(&ctx)
            .import_from_sheet(None, request)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert!(remote.calls().is_empty());
    }

    #[tokio::test]
    async fn test_director_cannot_import() {
        let remote = Arc::new(FakeRemote::new());
        let ctx = context_with(remote.clone());
        let director = User {
            username: "director".into(),
            full_name: "ผู้อำนวยการ".into(),
            role: UserRole::Director,
        };
        let request = ImportFromJsonRequest {
            json_data: json!([{"objective": "a"}]),
        };
        let err = ImportExecutor::new(&ctx)
            .import_from_json(Some(&director), request)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert!(remote.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_url_is_bad_request() {
        let ctx = context_with(Arc::new(FakeRemote::new()));
        let request = ImportFromSheetRequest {
            url: "ftp://example.com/sheet".into(),
        };
        let err = ImportExecutor::new(&ctx)
            .import_from_sheet(Some(&admin()), request)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unconfigured_remote_is_service_unavailable() {
        let remote = Arc::new(
            FakeRemote::new().fail(RemoteAction::ImportFromSheet, RemoteError::NotConfigured),
        );
        let ctx = context_with(remote);
        let request = ImportFromSheetRequest {
            url: "https://docs.google.com/spreadsheets/d/abc".into(),
        };
        let err = ImportExecutor::new(&ctx)
            .import_from_sheet(Some(&admin()), request)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Remote(RemoteError::NotConfigured)));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_remote_failure_is_bad_gateway() {
        let remote = Arc::new(FakeRemote::new().fail(
            RemoteAction::ImportFromJson,
            RemoteError::Network("connection reset".into()),
        ));
        let ctx = context_with(remote);
        let request = ImportFromJsonRequest {
            json_data: json!([{"objective": "a"}]),
        };
        let err = ImportExecutor::new(&ctx)
            .import_from_json(Some(&admin()), request)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Remote(RemoteError::Network(_))));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
