use serde::{Deserialize, Serialize};

/// Статус проверки на одном из четырёх этапов (семейство "4f")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StageStatus {
    #[default]
    NotStarted,
    Approved,
    NotRequired,
    Rejected,
}

impl StageStatus {
    pub fn code(&self) -> &'static str {
        match self {
            StageStatus::NotStarted => "notStarted",
            StageStatus::Approved => "approved",
            StageStatus::NotRequired => "notRequired",
            StageStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StageStatus::NotStarted => "ยังไม่เริ่ม",
            StageStatus::Approved => "ผ่านการตรวจสอบ",
            // Без финального тонового знака: так значение хранится в таблицах
            StageStatus::NotRequired => "ข้ามขั้นตอนนี",
            StageStatus::Rejected => "ไม่ผ่าน(แก้ไขจะระบุในหมายเหตุ)",
        }
    }

    /// CSS-класс совпадает с каноническим ключом
    pub fn color_class(&self) -> &'static str {
        self.code()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StageStatus::NotStarted => "⌛",
            StageStatus::Approved => "✅",
            StageStatus::NotRequired => "↪️",
            StageStatus::Rejected => "❌",
        }
    }

    pub fn all() -> Vec<StageStatus> {
        vec![
            StageStatus::NotStarted,
            StageStatus::Approved,
            StageStatus::NotRequired,
            StageStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "notStarted" => Some(StageStatus::NotStarted),
            "approved" => Some(StageStatus::Approved),
            "notRequired" => Some(StageStatus::NotRequired),
            "rejected" => Some(StageStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Этап проверки документа (отдел)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStage {
    Planning,
    Procurement,
    Finance,
    Budget,
}

impl ReviewStage {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReviewStage::Planning => "แผนงาน",
            ReviewStage::Procurement => "พัสดุ",
            ReviewStage::Finance => "การเงิน",
            ReviewStage::Budget => "งบประมาณ",
        }
    }

    /// Этапы в порядке прохождения документа
    pub fn all() -> [ReviewStage; 4] {
        [
            ReviewStage::Planning,
            ReviewStage::Procurement,
            ReviewStage::Finance,
            ReviewStage::Budget,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for status in StageStatus::all() {
            assert_eq!(StageStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_default_is_not_started() {
        assert_eq!(StageStatus::default(), StageStatus::NotStarted);
        assert_eq!(StageStatus::default().color_class(), "notStarted");
    }
}
