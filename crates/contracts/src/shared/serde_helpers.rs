//! Терпимая десериализация полей, приходящих из таблиц внешнего сервиса.
//!
//! Ячейки листа могут прийти числом, строкой, `null` или вовсе отсутствовать,
//! поэтому строки и даты читаются «как получится», а не падают на разборе.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

use super::dates::parse_date;

/// Строка из строки, числа, bool или `null` (последний даёт пустую строку)
pub mod lenient_string {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s,
            Some(other) => other.to_string(),
        })
    }
}

/// `Option<NaiveDate>`: читается из ISO-даты или ISO-метки времени,
/// пустое и нераспознанное значение дают `None`; пишется как `YYYY-MM-DD`
/// или пустая строка.
pub mod lenient_date {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = super::lenient_string::deserialize(deserializer)?;
        Ok(parse_date(&raw))
    }
}
