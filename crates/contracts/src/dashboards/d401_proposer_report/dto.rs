use serde::{Deserialize, Serialize};

/// Запрос отчёта по авторам за год буддийской эры
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProposerReportRequest {
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposerCount {
    pub name: String,
    /// Отдел из первого документа автора за год
    pub department: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentProposers {
    pub department: String,
    /// По убыванию числа документов
    pub proposers: Vec<ProposerCount>,
}

/// Отчёт по авторам: отделы в порядке каталога, неизвестные — в конце
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposerReportResponse {
    pub year: i32,
    pub total_documents: usize,
    pub departments: Vec<DepartmentProposers>,
}
