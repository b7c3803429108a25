use thiserror::Error;

/// Сообщение по умолчанию, если сервис вернул `success: false` без текста
pub const DEFAULT_API_ERROR: &str = "เกิดข้อผิดพลาดจาก API";

/// Ошибки обращения к внешнему сервису
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("External service URL is not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(String),

    /// Сервис ответил `success: false`
    #[error("External service error: {0}")]
    Api(String),

    #[error("Unexpected response from external service: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RemoteError::Decode(e.to_string())
        } else {
            RemoteError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(e: serde_json::Error) -> Self {
        RemoteError::Decode(e.to_string())
    }
}
