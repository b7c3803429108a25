use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{PermissionStatus, ReviewStage, StageStatus};
use crate::shared::catalogs::UNSPECIFIED_DEPARTMENT;
use crate::shared::serde_helpers::{lenient_date, lenient_string};
use crate::shared::status_catalog::StatusCatalog;

/// Вложение документа (непрозрачная ссылка на файл во внешнем хранилище)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub file_id: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub file_name: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub file_url: String,
}

/// Документ, поданный на рассмотрение.
///
/// Статусы хранятся в сыром виде, как пришли из таблицы; канонический
/// вариант получается через [`StatusCatalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Номер документа, назначается внешним сервисом и не меняется
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub doc_number: String,
    #[serde(default, with = "lenient_date")]
    pub submission_date: Option<NaiveDate>,
    /// Группа предметов / отдел (свободный текст из каталога)
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub department: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub proposer_name: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub objective: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub planning_status: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub procurement_status: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub finance_status: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub budget_status: String,
    /// Замечания по исправлению
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub notes1: String,
    /// Итоговое решение (сырое значение)
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub permission: String,
    /// Дата утверждения, имеет смысл только для утверждённых документов
    #[serde(default, with = "lenient_date")]
    pub approval_date: Option<NaiveDate>,
    /// Дополнительные замечания
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub notes2: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub work_group: String,
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

impl DocumentRecord {
    pub fn permission_status(&self, catalog: &StatusCatalog) -> PermissionStatus {
        catalog.permission(&self.permission)
    }

    /// Сырое значение статуса этапа
    pub fn stage_raw(&self, stage: ReviewStage) -> &str {
        match stage {
            ReviewStage::Planning => &self.planning_status,
            ReviewStage::Procurement => &self.procurement_status,
            ReviewStage::Finance => &self.finance_status,
            ReviewStage::Budget => &self.budget_status,
        }
    }

    pub fn stage_status(&self, stage: ReviewStage, catalog: &StatusCatalog) -> StageStatus {
        catalog.stage(self.stage_raw(stage))
    }

    /// Статусы всех четырёх этапов по порядку
    pub fn stage_statuses(&self, catalog: &StatusCatalog) -> [(ReviewStage, StageStatus); 4] {
        ReviewStage::all().map(|stage| (stage, self.stage_status(stage, catalog)))
    }

    /// Дата утверждения с учётом решения: для неутверждённых всегда `None`
    pub fn effective_approval_date(&self, catalog: &StatusCatalog) -> Option<NaiveDate> {
        match self.permission_status(catalog) {
            PermissionStatus::Approved => self.approval_date,
            _ => None,
        }
    }
}

/// Данные формы создания/редактирования документа
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentDto {
    /// Присутствует только при редактировании
    #[serde(default)]
    pub doc_number: Option<String>,
    #[serde(default, with = "lenient_date")]
    pub submission_date: Option<NaiveDate>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub proposer_name: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub planning_status: String,
    #[serde(default)]
    pub procurement_status: String,
    #[serde(default)]
    pub finance_status: String,
    #[serde(default)]
    pub budget_status: String,
    #[serde(default)]
    pub notes1: String,
    #[serde(default)]
    pub notes2: String,
    #[serde(default)]
    pub work_group: String,
    /// Администратор может задать решение прямо в форме
    #[serde(default)]
    pub permission: Option<String>,
}

/// Полезная нагрузка `saveDocument` для внешнего сервиса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<String>,
    #[serde(with = "lenient_date")]
    pub submission_date: Option<NaiveDate>,
    pub department: String,
    pub proposer_name: String,
    pub objective: String,
    pub planning_status: String,
    pub procurement_status: String,
    pub finance_status: String,
    pub budget_status: String,
    pub notes1: String,
    pub notes2: String,
    pub work_group: String,
    pub permission: String,
    #[serde(with = "lenient_date")]
    pub approval_date: Option<NaiveDate>,
}

impl DocumentDto {
    /// Собрать полезную нагрузку для сохранения.
    ///
    /// `existing` — текущая версия документа при редактировании.
    /// Пустое решение берётся из текущей версии, иначе «กำลังดำเนินการ».
    /// Дата утверждения при редактировании сохраняется, для нового документа
    /// ставится `today`, если решение канонизируется в «утверждён».
    pub fn into_payload(
        self,
        existing: Option<&DocumentRecord>,
        catalog: &StatusCatalog,
        today: NaiveDate,
    ) -> DocumentPayload {
        let permission = self
            .permission
            .filter(|p| !p.trim().is_empty())
            .or_else(|| existing.map(|d| d.permission.clone()))
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| PermissionStatus::Pending.display_name().to_string());

        let approval_date = match existing {
            Some(doc) => doc.approval_date,
            None if catalog.permission(&permission) == PermissionStatus::Approved => Some(today),
            None => None,
        };

        let department = if self.department.trim().is_empty() {
            UNSPECIFIED_DEPARTMENT.to_string()
        } else {
            self.department
        };

        DocumentPayload {
            doc_number: existing
                .map(|d| d.doc_number.clone())
                .filter(|n| !n.is_empty()),
            submission_date: self.submission_date,
            department,
            proposer_name: self.proposer_name,
            objective: self.objective,
            planning_status: self.planning_status,
            procurement_status: self.procurement_status,
            finance_status: self.finance_status,
            budget_status: self.budget_status,
            notes1: self.notes1,
            notes2: self.notes2,
            work_group: self.work_group,
            permission,
            approval_date,
        }
    }
}

/// Запрос на смену итогового решения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStatusUpdate {
    pub new_status: String,
}
