use serde::{Deserialize, Serialize};

use super::serde_helpers::lenient_string;

/// Запись журнала действий, приходит вместе с начальной загрузкой данных
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub user: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub action: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub details: String,
}
