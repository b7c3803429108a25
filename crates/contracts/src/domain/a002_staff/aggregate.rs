use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::lenient_string;

/// Сотрудник, который может быть автором документа.
///
/// Связь с документом не ссылочная: `DocumentRecord::proposer_name` —
/// обычная строка, совпадение имён проверяется только при отображении.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub id: String,
    #[serde(
        rename = "fullName",
        default,
        deserialize_with = "lenient_string::deserialize"
    )]
    pub full_name: String,
    #[serde(
        rename = "Department",
        default,
        deserialize_with = "lenient_string::deserialize"
    )]
    pub department: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub email: String,
}

/// Данные формы сотрудника; `id` отсутствует при создании
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(rename = "Department", default)]
    pub department: String,
    #[serde(default)]
    pub email: String,
}

/// Имена авторов для выпадающего списка посетителя.
///
/// Без отдела — все уникальные имена; с отделом — имена сотрудников этого
/// отдела. В обоих случаях список отсортирован и без повторов.
pub fn proposer_names(staff: &[StaffRecord], department: Option<&str>) -> Vec<String> {
    let mut names: Vec<String> = staff
        .iter()
        .filter(|s| department.map_or(true, |d| d.is_empty() || s.department == d))
        .map(|s| s.full_name.clone())
        .filter(|name| !name.trim().is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}
