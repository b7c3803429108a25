//! Проверка роли до обращения к внешнему сервису.
//!
//! Окончательное решение остаётся за внешним сервисом; здесь отсекаются
//! запросы, которые он заведомо отклонит.

use contracts::system::auth::User;

use crate::shared::error::ServiceError;

/// Только администратор: документы, сотрудники, импорт, экспорт
pub fn require_manager(user: Option<&User>) -> Result<&User, ServiceError> {
    let user = user.ok_or(ServiceError::Unauthorized)?;
    if !user.role.can_manage() {
        return Err(ServiceError::Forbidden(format!(
            "role {} cannot manage documents",
            user.role.display_name()
        )));
    }
    Ok(user)
}

/// Администратор или директор: смена итогового решения
pub fn require_decider(user: Option<&User>) -> Result<&User, ServiceError> {
    let user = user.ok_or(ServiceError::Unauthorized)?;
    if !user.role.can_decide() {
        return Err(ServiceError::Forbidden(format!(
            "role {} cannot change permission",
            user.role.display_name()
        )));
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::UserRole;

    fn user(role: UserRole) -> User {
        User {
            username: "u".into(),
            full_name: "ผู้ใช้".into(),
            role,
        }
    }

    #[test]
    fn test_visitor_is_unauthorized() {
        assert!(matches!(require_manager(None), Err(ServiceError::Unauthorized)));
        assert!(matches!(require_decider(None), Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn test_director_can_decide_but_not_manage() {
        let director = user(UserRole::Director);
        assert!(require_decider(Some(&director)).is_ok());
        assert!(matches!(
            require_manager(Some(&director)),
            Err(ServiceError::Forbidden(_))
        ));
    }

    #[test]
    fn test_admin_can_do_everything() {
        let admin = user(UserRole::Admin);
        assert!(require_manager(Some(&admin)).is_ok());
        assert!(require_decider(Some(&admin)).is_ok());
    }
}
