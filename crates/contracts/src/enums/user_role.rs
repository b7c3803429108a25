use serde::{Deserialize, Serialize};

/// Роль вошедшего пользователя. Посетитель роли не имеет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Director,
}

impl UserRole {
    /// Создание, редактирование, удаление, импорт и экспорт
    pub fn can_manage(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Изменение итогового решения по документу
    pub fn can_decide(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Director)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "ผู้ดูแลระบบ",
            UserRole::Director => "ผู้อำนวยการ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissions_by_role() {
        assert!(UserRole::Admin.can_manage());
        assert!(UserRole::Admin.can_decide());
        assert!(!UserRole::Director.can_manage());
        assert!(UserRole::Director.can_decide());
    }
}
