use serde::{Deserialize, Serialize};

use crate::domain::a001_document::aggregate::DocumentRecord;

/// Ошибка отдельной строки импорта
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportErrorEntry {
    #[serde(default)]
    pub row: Option<usize>,
    #[serde(default)]
    pub message: String,
}

/// Результат импорта, как его возвращает внешний сервис
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResult {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "importedCount", default)]
    pub imported_count: usize,
    #[serde(default)]
    pub errors: Vec<ImportErrorEntry>,
    /// Полный актуальный список документов после импорта
    #[serde(rename = "updatedDocuments", default)]
    pub updated_documents: Vec<DocumentRecord>,
}

/// Ответ клиенту
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub success: bool,
    pub imported_count: usize,
    pub errors: Vec<ImportErrorEntry>,
    /// Размер списка документов после замены снимка
    pub total_documents: usize,
}
