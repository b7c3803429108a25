use serde_json::json;

use contracts::system::auth::{LoginRequest, User};

use crate::shared::app_context::AppContext;
use crate::shared::error::ServiceError;
use crate::shared::remote::{RemoteAction, RemoteError};

/// Вход: учётные данные проверяет внешний сервис и возвращает пользователя
pub async fn login(ctx: &AppContext, request: LoginRequest) -> Result<User, ServiceError> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(ServiceError::Validation(
            "username and password are required".into(),
        ));
    }

    let payload = json!({
        "credentials": {
            "username": request.username.trim(),
            "password": request.password,
        }
    });

    let reply = match ctx.remote.call(RemoteAction::VerifyLogin, payload, None).await {
        Ok(reply) => reply,
        Err(RemoteError::Api(message)) => {
            tracing::warn!("Login rejected for '{}': {}", request.username.trim(), message);
            return Err(ServiceError::Unauthorized);
        }
        Err(e) => return Err(e.into()),
    };

    let user: User = reply.decode()?;
    tracing::info!("User '{}' logged in as {:?}", user.username, user.role);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::app_context::testing::context_with;
    use crate::shared::remote::fake::FakeRemote;
    use contracts::enums::UserRole;
    use std::sync::Arc;

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_login_returns_user() {
        let remote = Arc::new(FakeRemote::new().reply(
            RemoteAction::VerifyLogin,
            json!({"username": "director", "fullName": "ผอ.สมศักดิ์", "role": "Director"}),
        ));
        let ctx = context_with(remote.clone());

        let user = login(&ctx, request(" director ", "secret")).await.unwrap();
        assert_eq!(user.role, UserRole::Director);

        let calls = remote.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].payload["credentials"]["username"], "director");
        assert!(calls[0].user.is_none());
    }

    #[tokio::test]
    async fn test_rejected_credentials_are_unauthorized() {
        let remote = Arc::new(FakeRemote::new().fail(
            RemoteAction::VerifyLogin,
            RemoteError::Api("Invalid credentials".into()),
        ));
        let ctx = context_with(remote);
        let result = login(&ctx, request("admin", "wrong")).await;
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_empty_credentials_skip_remote() {
        let remote = Arc::new(FakeRemote::new());
        let ctx = context_with(remote.clone());
        let result = login(&ctx, request("  ", "")).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(remote.calls().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_is_not_hidden() {
        let remote = Arc::new(FakeRemote::new().fail(
            RemoteAction::VerifyLogin,
            RemoteError::Network("timeout".into()),
        ));
        let ctx = context_with(remote);
        let result = login(&ctx, request("admin", "pw")).await;
        assert!(matches!(result, Err(ServiceError::Remote(RemoteError::Network(_)))));
    }
}
