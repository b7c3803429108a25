use serde::{Deserialize, Serialize};

use crate::enums::PermissionStatus;

/// Запрос статистики за год буддийской эры (พ.ศ.)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentStatsRequest {
    /// Без года берётся год отчёта из настроек
    #[serde(default)]
    pub year: Option<i32>,
}

/// Счётчики документов по итоговому решению
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn add(&mut self, status: PermissionStatus) {
        self.total += 1;
        match status {
            PermissionStatus::Pending => self.pending += 1,
            PermissionStatus::Approved => self.approved += 1,
            PermissionStatus::Rejected => self.rejected += 1,
        }
    }
}

/// Разбивка по отделу
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub department: String,
    #[serde(flatten)]
    pub counts: StatusCounts,
}

/// Ответ дашборда статистики
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStatsResponse {
    /// Год буддийской эры
    pub year: i32,
    pub summary: StatusCounts,
    /// Отсортировано по числу документов, по убыванию
    pub by_department: Vec<DepartmentStats>,
}
