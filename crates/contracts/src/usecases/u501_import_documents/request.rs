use serde::{Deserialize, Serialize};

/// Импорт документов из Google Sheet; лист разбирает внешний сервис
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportFromSheetRequest {
    pub url: String,
}

/// Импорт документов из JSON.
///
/// Ожидается непустой массив объектов; строки передаются внешнему сервису
/// без изменений.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportFromJsonRequest {
    #[serde(rename = "jsonData", alias = "json_data")]
    pub json_data: serde_json::Value,
}
