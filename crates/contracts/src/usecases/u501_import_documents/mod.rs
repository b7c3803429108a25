pub mod request;
pub mod response;

pub use request::{ImportFromJsonRequest, ImportFromSheetRequest};
pub use response::{ImportErrorEntry, ImportResponse, ImportResult};

use crate::usecases::common::UseCaseMetadata;

/// Массовый импорт документов (из Google Sheet или JSON)
pub struct ImportDocuments;

impl UseCaseMetadata for ImportDocuments {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "import_documents"
    }

    fn display_name() -> &'static str {
        "นำเข้าเอกสาร"
    }

    fn description() -> &'static str {
        "Import documents from a Google Sheet URL or a JSON array; rows are parsed by the external service"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(ImportDocuments::full_name(), "u501_import_documents");
    }
}
