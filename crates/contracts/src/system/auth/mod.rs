use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// Учётные данные; проверяет их внешний сервис
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Вошедший пользователь, как его вернул внешний сервис
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub role: UserRole,
}

/// Запрос, изменяющий данные: действующий пользователь + полезная нагрузка.
/// Пользователь передаётся внешнему сервису вместе с действием.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRequest<T> {
    #[serde(default)]
    pub user: Option<User>,
    pub payload: T,
}

/// Тело запроса без полезной нагрузки (удаление)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    #[serde(default)]
    pub user: Option<User>,
}
