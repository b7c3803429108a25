use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use std::time::Duration;

use contracts::system::auth::User;

use super::{InitialBundle, RemoteAction, RemoteEnvelope, RemoteError, RemoteReply, RemoteService};
use crate::shared::config::RemoteConfig;

/// Скрипт-сервис ожидает JSON в теле с типом text/plain
const REQUEST_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

#[derive(Serialize)]
struct ActionRequest<'a> {
    action: &'a str,
    payload: serde_json::Value,
    user: Option<&'a User>,
}

/// HTTP-клиент веб-приложения скрипта
pub struct ScriptServiceClient {
    client: reqwest::Client,
    url: Option<String>,
}

impl ScriptServiceClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let url = config
            .is_configured()
            .then(|| config.script_url.trim().to_string());
        Ok(Self { client, url })
    }

    fn url(&self) -> Result<&str, RemoteError> {
        self.url.as_deref().ok_or(RemoteError::NotConfigured)
    }

    async fn read_envelope(response: reqwest::Response) -> Result<RemoteEnvelope, RemoteError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::error!("External service returned HTTP {}: {}", status, body);
            return Err(RemoteError::Network(format!("HTTP {}", status)));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RemoteService for ScriptServiceClient {
    async fn fetch_initial(&self) -> Result<InitialBundle, RemoteError> {
        let url = self.url()?;
        tracing::debug!("Fetching initial data from external service");
        let response = self.client.get(url).send().await?;
        let reply = Self::read_envelope(response).await?.into_reply()?;
        reply.decode()
    }

    async fn call(
        &self,
        action: RemoteAction,
        payload: serde_json::Value,
        user: Option<&User>,
    ) -> Result<RemoteReply, RemoteError> {
        let url = self.url()?;
        let body = serde_json::to_string(&ActionRequest {
            action: action.name(),
            payload,
            user,
        })?;

        let started = std::time::Instant::now();
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, REQUEST_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        let result = Self::read_envelope(response).await?.into_reply();

        match &result {
            Ok(_) => tracing::info!(
                "Remote action {} completed in {} ms",
                action,
                started.elapsed().as_millis()
            ),
            Err(e) => tracing::warn!("Remote action {} failed: {}", action, e),
        }
        result
    }
}
