use serde::{Deserialize, Serialize};

/// Итоговое решение по документу (разрешение директора)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl PermissionStatus {
    /// Канонический ключ статуса
    pub fn code(&self) -> &'static str {
        match self {
            PermissionStatus::Pending => "pending",
            PermissionStatus::Approved => "approved",
            PermissionStatus::Rejected => "rejected",
        }
    }

    /// Отображаемый текст бейджа
    pub fn display_name(&self) -> &'static str {
        match self {
            PermissionStatus::Pending => "กำลังดำเนินการ",
            PermissionStatus::Approved => "อนุมัติแล้ว",
            PermissionStatus::Rejected => "ไม่อนุมัติ",
        }
    }

    /// CSS-класс (цвет) бейджа
    pub fn color_class(&self) -> &'static str {
        match self {
            PermissionStatus::Pending => "yellow",
            PermissionStatus::Approved => "green",
            PermissionStatus::Rejected => "red",
        }
    }

    pub fn all() -> Vec<PermissionStatus> {
        vec![
            PermissionStatus::Pending,
            PermissionStatus::Approved,
            PermissionStatus::Rejected,
        ]
    }

    /// Парсинг канонического ключа (не сырого значения из таблицы)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(PermissionStatus::Pending),
            "approved" => Some(PermissionStatus::Approved),
            "rejected" => Some(PermissionStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
