use serde::{Deserialize, Serialize};

/// Семейство статусов: итоговое разрешение или один из четырёх этапов
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatusFamily {
    #[serde(rename = "permission")]
    Permission,
    /// Все четыре этапа используют одно перечисление
    #[serde(rename = "4f")]
    FourStage,
}

impl StatusFamily {
    pub fn code(&self) -> &'static str {
        match self {
            StatusFamily::Permission => "permission",
            StatusFamily::FourStage => "4f",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "permission" => Some(StatusFamily::Permission),
            "4f" => Some(StatusFamily::FourStage),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
