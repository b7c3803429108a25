//! Канонизация статусов.
//!
//! Сырые значения статусов в таблицах накопили несколько исторических
//! написаний на тайском и английском. Справочник сопоставляет каждое
//! известное написание ровно одному варианту перечисления. Поиск строго
//! точный (после обрезки пробелов): значение, отличающееся хотя бы одним
//! символом, получает статус по умолчанию. Справочник загружается из JSON,
//! встроенная копия лежит рядом в `status_catalog.json`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::enums::{PermissionStatus, StageStatus, StatusFamily};

const BUILTIN_CATALOG_JSON: &str = include_str!("status_catalog.json");

static BUILTIN_CATALOG: Lazy<StatusCatalog> = Lazy::new(|| {
    StatusCatalog::from_json(BUILTIN_CATALOG_JSON).expect("embedded status catalog is valid")
});

/// Ошибки загрузки справочника статусов
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("status catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("family '{family}': key {key:?} has surrounding whitespace or is empty and can never match")]
    UnmatchableKey { family: StatusFamily, key: String },

    #[error("family '{family}': display text {text:?} of '{canonical}' does not resolve back to it")]
    UnstableDisplayText {
        family: StatusFamily,
        canonical: String,
        text: String,
    },
}

/// Описание статуса для отображения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDescriptor {
    pub canonical_key: String,
    pub display_text: String,
    pub color_class: String,
}

impl From<PermissionStatus> for StatusDescriptor {
    fn from(status: PermissionStatus) -> Self {
        Self {
            canonical_key: status.code().to_string(),
            display_text: status.display_name().to_string(),
            color_class: status.color_class().to_string(),
        }
    }
}

impl From<StageStatus> for StatusDescriptor {
    fn from(status: StageStatus) -> Self {
        Self {
            canonical_key: status.code().to_string(),
            display_text: status.display_name().to_string(),
            color_class: status.color_class().to_string(),
        }
    }
}

/// Результат канонизации с признаком того, найдено ли значение в справочнике.
///
/// `recognized == false` означает подстановку значения по умолчанию:
/// дескриптор тогда не отражает исходное намерение.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResolution {
    pub descriptor: StatusDescriptor,
    pub recognized: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    permission: HashMap<String, PermissionStatus>,
    #[serde(default, rename = "4f")]
    four_stage: HashMap<String, StageStatus>,
}

/// Справочник написаний статусов -> канонический вариант
#[derive(Debug, Clone)]
pub struct StatusCatalog {
    permission: HashMap<String, PermissionStatus>,
    stage: HashMap<String, StageStatus>,
}

impl StatusCatalog {
    /// Встроенный справочник
    pub fn builtin() -> &'static StatusCatalog {
        &BUILTIN_CATALOG
    }

    /// Загрузить и проверить справочник из JSON вида
    /// `{"permission": {"raw": "pending", ...}, "4f": {"raw": "notStarted", ...}}`
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let catalog = Self {
            permission: file.permission,
            stage: file.four_stage,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        check_keys(StatusFamily::Permission, self.permission.keys())?;
        check_keys(StatusFamily::FourStage, self.stage.keys())?;

        // Отображаемый текст, поданный обратно, должен давать тот же статус
        for status in PermissionStatus::all() {
            if self.lookup_permission(status.display_name()) != Some(status) {
                return Err(CatalogError::UnstableDisplayText {
                    family: StatusFamily::Permission,
                    canonical: status.code().to_string(),
                    text: status.display_name().to_string(),
                });
            }
        }
        for status in StageStatus::all() {
            if self.lookup_stage(status.display_name()) != Some(status) {
                return Err(CatalogError::UnstableDisplayText {
                    family: StatusFamily::FourStage,
                    canonical: status.code().to_string(),
                    text: status.display_name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Точный поиск итогового решения; `None` если написание неизвестно
    pub fn lookup_permission(&self, raw: &str) -> Option<PermissionStatus> {
        self.permission.get(raw.trim()).copied()
    }

    /// Точный поиск статуса этапа; `None` если написание неизвестно
    pub fn lookup_stage(&self, raw: &str) -> Option<StageStatus> {
        self.stage.get(raw.trim()).copied()
    }

    /// Итоговое решение, неизвестное написание -> `Pending`
    pub fn permission(&self, raw: &str) -> PermissionStatus {
        self.lookup_permission(raw).unwrap_or_default()
    }

    /// Статус этапа, неизвестное написание -> `NotStarted`
    pub fn stage(&self, raw: &str) -> StageStatus {
        self.lookup_stage(raw).unwrap_or_default()
    }

    /// Канонизация с признаком распознавания
    pub fn resolve_checked(&self, family: StatusFamily, raw: &str) -> StatusResolution {
        match family {
            StatusFamily::Permission => {
                let found = self.lookup_permission(raw);
                StatusResolution {
                    descriptor: found.unwrap_or_default().into(),
                    recognized: found.is_some(),
                }
            }
            StatusFamily::FourStage => {
                let found = self.lookup_stage(raw);
                StatusResolution {
                    descriptor: found.unwrap_or_default().into(),
                    recognized: found.is_some(),
                }
            }
        }
    }

    /// Канонизация: всегда возвращает дескриптор, даже для мусора
    pub fn resolve(&self, family: StatusFamily, raw: &str) -> StatusDescriptor {
        self.resolve_checked(family, raw).descriptor
    }

    /// Все известные написания итогового решения (отсортированы)
    pub fn permission_spellings(&self) -> Vec<(&str, PermissionStatus)> {
        let mut items: Vec<_> = self
            .permission
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        items.sort_by(|a, b| a.0.cmp(b.0));
        items
    }

    /// Все известные написания статусов этапов (отсортированы)
    pub fn stage_spellings(&self) -> Vec<(&str, StageStatus)> {
        let mut items: Vec<_> = self.stage.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        items.sort_by(|a, b| a.0.cmp(b.0));
        items
    }
}

fn check_keys<'a>(
    family: StatusFamily,
    keys: impl Iterator<Item = &'a String>,
) -> Result<(), CatalogError> {
    for key in keys {
        if key.is_empty() || key.trim() != key {
            return Err(CatalogError::UnmatchableKey {
                family,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

/// Канонизация по встроенному справочнику
pub fn resolve_status(family: StatusFamily, raw: &str) -> StatusDescriptor {
    StatusCatalog::builtin().resolve(family, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static StatusCatalog {
        StatusCatalog::builtin()
    }

    #[test]
    fn test_builtin_catalog_loads() {
        assert_eq!(catalog().permission_spellings().len(), 9);
        assert_eq!(catalog().stage_spellings().len(), 8);
    }

    #[test]
    fn test_every_permission_spelling_maps_to_its_descriptor() {
        for (raw, status) in catalog().permission_spellings() {
            let resolved = resolve_status(StatusFamily::Permission, raw);
            assert_eq!(resolved, StatusDescriptor::from(status), "raw = {raw:?}");
        }
    }

    #[test]
    fn test_every_stage_spelling_maps_to_its_descriptor() {
        for (raw, status) in catalog().stage_spellings() {
            let resolved = resolve_status(StatusFamily::FourStage, raw);
            assert_eq!(resolved, StatusDescriptor::from(status), "raw = {raw:?}");
            assert!(catalog().resolve_checked(StatusFamily::FourStage, raw).recognized);
        }
    }

    #[test]
    fn test_unknown_permission_falls_back_to_pending() {
        let pending = StatusDescriptor::from(PermissionStatus::Pending);
        for raw in ["", "   ", "approved", "อนุมัติแล้ว.", "อนุมัติ แล้ว", "garbage"] {
            assert_eq!(resolve_status(StatusFamily::Permission, raw), pending, "raw = {raw:?}");
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            resolve_status(StatusFamily::Permission, "  อนุมัติ \n").canonical_key,
            "approved"
        );
        assert_eq!(
            resolve_status(StatusFamily::FourStage, "\tPassed ").canonical_key,
            "approved"
        );
    }

    #[test]
    fn test_four_stage_scenarios() {
        let empty = resolve_status(StatusFamily::FourStage, "");
        assert_eq!(empty, StatusDescriptor::from(StageStatus::NotStarted));

        let passed = resolve_status(StatusFamily::FourStage, "ผ่านการตรวจสอบ");
        assert_eq!(passed, StatusDescriptor::from(StageStatus::Approved));
    }

    #[test]
    fn test_near_duplicate_spelling_is_not_unified() {
        // Вариант с финальным тоновым знаком отсутствует в справочнике
        let resolution = catalog().resolve_checked(StatusFamily::FourStage, "ข้ามขั้นตอนนี้");
        assert!(!resolution.recognized);
        assert_eq!(resolution.descriptor.canonical_key, "notStarted");

        let exact = catalog().resolve_checked(StatusFamily::FourStage, "ข้ามขั้นตอนนี");
        assert!(exact.recognized);
        assert_eq!(exact.descriptor.canonical_key, "notRequired");
    }

    #[test]
    fn test_display_text_is_stable() {
        for family in [StatusFamily::Permission, StatusFamily::FourStage] {
            for raw in ["", "กำลังดำเนินการ", "อนุมัติ", "Failed", "Skip", "xyz"] {
                let first = resolve_status(family, raw);
                let second = resolve_status(family, &first.display_text);
                assert_eq!(first, second, "family = {family}, raw = {raw:?}");
            }
        }
        let pending = resolve_status(StatusFamily::Permission, "กำลังดำเนินการ");
        assert_eq!(pending.canonical_key, "pending");
        assert_eq!(pending.color_class, "yellow");
    }

    #[test]
    fn test_custom_catalog_extends_spellings() {
        let json = r#"{
            "permission": {
                "กำลังดำเนินการ": "pending",
                "อนุมัติแล้ว": "approved",
                "ไม่อนุมัติ": "rejected",
                "รอพิจารณา": "pending"
            },
            "4f": {
                "ยังไม่เริ่ม": "notStarted",
                "ผ่านการตรวจสอบ": "approved",
                "ข้ามขั้นตอนนี": "notRequired",
                "ไม่ผ่าน(แก้ไขจะระบุในหมายเหตุ)": "rejected",
                "ผ่าน": "approved"
            }
        }"#;
        let custom = StatusCatalog::from_json(json).unwrap();
        assert_eq!(custom.permission("รอพิจารณา"), PermissionStatus::Pending);
        assert_eq!(custom.stage("ผ่าน"), StageStatus::Approved);
        // в этом справочнике английских написаний нет
        assert_eq!(custom.permission("Approved"), PermissionStatus::Pending);
    }

    #[test]
    fn test_catalog_without_display_text_is_rejected() {
        let json = r#"{"permission": {"Approved": "approved"}, "4f": {}}"#;
        let err = StatusCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::UnstableDisplayText { .. }));
    }

    #[test]
    fn test_catalog_with_padded_key_is_rejected() {
        let json = r#"{"permission": {" อนุมัติ": "approved"}, "4f": {}}"#;
        let err = StatusCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::UnmatchableKey { .. }));
    }

    #[test]
    fn test_catalog_with_unknown_canonical_key_is_rejected() {
        let json = r#"{"permission": {"อนุมัติ": "maybe"}, "4f": {}}"#;
        assert!(matches!(
            StatusCatalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }
}
