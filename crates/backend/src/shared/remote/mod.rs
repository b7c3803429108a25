//! Внешний сервис на базе таблиц.
//!
//! Единственная точка удалённого вызова: `GET` отдаёт начальный набор
//! данных, `POST` выполняет действие `{action, payload, user}` и отвечает
//! конвертом `{success, data, error}`. Хранение, проверка паролей и
//! бизнес-правила живут там; здесь только транспорт.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod fake;

pub use client::ScriptServiceClient;
pub use error::RemoteError;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use contracts::domain::a001_document::aggregate::DocumentRecord;
use contracts::domain::a002_staff::aggregate::StaffRecord;
use contracts::shared::activity_log::ActivityLogEntry;
use contracts::system::auth::User;

use error::DEFAULT_API_ERROR;

/// Действия удалённого сервиса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteAction {
    VerifyLogin,
    SaveDocument,
    DeleteDocument,
    UpdateStatus,
    SaveStaff,
    DeleteStaff,
    ImportFromSheet,
    ImportFromJson,
    ExportToGoogleSheet,
}

impl RemoteAction {
    pub fn name(&self) -> &'static str {
        match self {
            RemoteAction::VerifyLogin => "verifyLogin",
            RemoteAction::SaveDocument => "saveDocument",
            RemoteAction::DeleteDocument => "deleteDocument",
            RemoteAction::UpdateStatus => "updateStatus",
            RemoteAction::SaveStaff => "saveStaff",
            RemoteAction::DeleteStaff => "deleteStaff",
            RemoteAction::ImportFromSheet => "importFromSheet",
            RemoteAction::ImportFromJson => "importFromJson",
            RemoteAction::ExportToGoogleSheet => "exportToGoogleSheet",
        }
    }
}

impl std::fmt::Display for RemoteAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Начальный набор данных (`GET`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitialBundle {
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub staff: Vec<StaffRecord>,
    #[serde(rename = "recentActivity", default)]
    pub recent_activity: Vec<ActivityLogEntry>,
}

/// Конверт ответа сервиса
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    /// Ссылка на созданную таблицу (только у экспорта)
    #[serde(default)]
    pub url: Option<String>,
}

/// Успешный ответ: данные и, если есть, ссылка верхнего уровня
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteReply {
    pub data: serde_json::Value,
    pub url: Option<String>,
}

impl RemoteReply {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data, url: None }
    }

    pub fn decode<T: DeserializeOwned>(self) -> Result<T, RemoteError> {
        Ok(serde_json::from_value(self.data)?)
    }
}

impl RemoteEnvelope {
    pub fn into_reply(self) -> Result<RemoteReply, RemoteError> {
        if !self.success {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_ERROR.to_string());
            return Err(RemoteError::Api(message));
        }
        Ok(RemoteReply {
            data: self.data.unwrap_or(serde_json::Value::Null),
            url: self.url,
        })
    }
}

/// Транспорт к внешнему сервису
#[async_trait]
pub trait RemoteService: Send + Sync {
    /// Начальная загрузка документов, сотрудников и журнала
    async fn fetch_initial(&self) -> Result<InitialBundle, RemoteError>;

    /// Выполнить действие от имени пользователя
    async fn call(
        &self,
        action: RemoteAction,
        payload: serde_json::Value,
        user: Option<&User>,
    ) -> Result<RemoteReply, RemoteError>;
}
