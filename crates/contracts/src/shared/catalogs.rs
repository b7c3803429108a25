use serde::{Deserialize, Serialize};

use super::status_catalog::StatusDescriptor;
use crate::enums::{PermissionStatus, ReviewStage, StageStatus};

/// Группы предметов / отделы (กลุ่มสาระ/ฝ่าย) в порядке отображения
pub const SUBJECT_GROUPS: [&str; 14] = [
    "ผู้บริหาร",
    "กลุ่มสาระการงานอาชีพ",
    "กลุ่มสาระคณิตศาสตร์",
    "กลุ่มสาระภาษาต่างประเทศ",
    "กลุ่มสาระภาษาไทย",
    "กลุ่มสาระวิทยาศาสตร์และเทคโนโลยี",
    "กลุ่มสาระศิลปะ",
    "กลุ่มสาระสังคมศึกษา",
    "กลุ่มสาระสุขศึกษา-พละ",
    "ฝ่ายสนับสนุนการสอน",
    "ครูต่างชาติ",
    "พนักงานราชการ",
    "ลูกจ้างชั่วคราว",
    "อื่นๆ",
];

/// Рабочие группы (กลุ่มงาน)
pub const WORK_GROUPS: [&str; 5] = ["วิชาการ", "บริหารทั่วไป", "งบประมาณ", "บุคคล", "อื่นๆ"];

/// Отдел документа, если форма пришла без него
pub const UNSPECIFIED_DEPARTMENT: &str = "ยังไม่ระบุ";

/// Группа «прочее» для отчётов
pub const OTHER_GROUP: &str = "อื่นๆ";

/// Подпись для документа без имени автора
pub const UNKNOWN_PROPOSER: &str = "ไม่ระบุ";

/// Значения, которые директор выбирает при смене решения.
/// Это сырые написания, а не отображаемые тексты: «อนุมัติ» хранится как есть.
pub const PERMISSION_CHOICES: [&str; 3] = ["กำลังดำเนินการ", "อนุมัติ", "ไม่อนุมัติ"];

/// Позиция отдела в каталоге; неизвестные отделы идут после всех известных
pub fn subject_group_rank(department: &str) -> usize {
    SUBJECT_GROUPS
        .iter()
        .position(|g| *g == department)
        .unwrap_or(SUBJECT_GROUPS.len())
}

/// Подпись этапа вместе с вариантами статуса, для формы редактирования
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageCatalogEntry {
    pub stage: ReviewStage,
    pub label: String,
}

/// Справочники для выпадающих списков клиента
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogsResponse {
    pub subject_groups: Vec<String>,
    pub work_groups: Vec<String>,
    pub stages: Vec<StageCatalogEntry>,
    pub permission_statuses: Vec<StatusDescriptor>,
    pub stage_statuses: Vec<StatusDescriptor>,
    pub permission_choices: Vec<String>,
}

impl CatalogsResponse {
    pub fn build() -> Self {
        Self {
            subject_groups: SUBJECT_GROUPS.iter().map(|s| s.to_string()).collect(),
            work_groups: WORK_GROUPS.iter().map(|s| s.to_string()).collect(),
            stages: ReviewStage::all()
                .into_iter()
                .map(|stage| StageCatalogEntry {
                    stage,
                    label: stage.display_name().to_string(),
                })
                .collect(),
            permission_statuses: PermissionStatus::all().into_iter().map(Into::into).collect(),
            stage_statuses: StageStatus::all().into_iter().map(Into::into).collect(),
            permission_choices: PERMISSION_CHOICES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
