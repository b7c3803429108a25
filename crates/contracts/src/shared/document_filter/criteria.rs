use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_document::aggregate::DocumentRecord;
use crate::enums::PermissionStatus;
use crate::shared::dates::{month_range, parse_date};
use crate::shared::status_catalog::StatusCatalog;

/// Критерии фильтрации списка документов.
///
/// Все поля необязательны: пустая строка означает «без ограничения».
/// Названия полей в JSON/query совпадают с клиентскими (`dateFrom`,
/// `monthFilter`); старое имя `group` принимается как `department`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Подстрока без учёта регистра: цель, автор или номер документа
    pub search: String,
    #[serde(alias = "group")]
    pub department: String,
    pub proposer: String,
    /// Отображаемый текст решения, например «อนุมัติแล้ว»
    pub permission: String,
    /// Точная дата подачи, `YYYY-MM-DD`
    pub date: String,
    pub date_from: String,
    pub date_to: String,
    /// Месяц `YYYY-MM`, имеет приоритет над остальными датами
    pub month_filter: String,
    /// Только документы, ожидающие решения (очередь директора)
    pub pending_only: bool,
}

/// Ограничение по дате подачи после разрешения приоритетов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateConstraint {
    Unbounded,
    Exact(NaiveDate),
    /// Включительный диапазон, любая граница может отсутствовать
    Range {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl DateConstraint {
    pub fn matches(&self, date: Option<NaiveDate>) -> bool {
        match self {
            DateConstraint::Unbounded => true,
            DateConstraint::Exact(expected) => date == Some(*expected),
            DateConstraint::Range { from, to } => match date {
                Some(d) => from.map_or(true, |f| d >= f) && to.map_or(true, |t| d <= t),
                None => false,
            },
        }
    }
}

impl FilterCriteria {
    /// Месяц -> диапазон первого и последнего дня; иначе диапазон
    /// `dateFrom..=dateTo`; иначе точная дата. Нераспознанные значения
    /// ограничения не накладывают.
    pub fn date_constraint(&self) -> DateConstraint {
        if let Some((first, last)) = non_empty(&self.month_filter).and_then(month_range) {
            return DateConstraint::Range {
                from: Some(first),
                to: Some(last),
            };
        }

        let from = parse_date(&self.date_from);
        let to = parse_date(&self.date_to);
        if from.is_some() || to.is_some() {
            return DateConstraint::Range { from, to };
        }

        match parse_date(&self.date) {
            Some(d) => DateConstraint::Exact(d),
            None => DateConstraint::Unbounded,
        }
    }

    /// Ни одно поле не ограничивает выборку
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.department.is_empty()
            && self.proposer.is_empty()
            && self.permission.is_empty()
            && !self.pending_only
            && self.date_constraint() == DateConstraint::Unbounded
    }

    /// Подготовить критерии к многократной проверке документов
    pub fn compile<'a>(&'a self, catalog: &'a StatusCatalog) -> DocumentMatcher<'a> {
        DocumentMatcher {
            criteria: self,
            catalog,
            search: self.search.trim().to_lowercase(),
            dates: self.date_constraint(),
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Предикат над документом; все активные условия объединяются через «И»
pub struct DocumentMatcher<'a> {
    criteria: &'a FilterCriteria,
    catalog: &'a StatusCatalog,
    search: String,
    dates: DateConstraint,
}

impl DocumentMatcher<'_> {
    pub fn matches(&self, doc: &DocumentRecord) -> bool {
        self.matches_search(doc)
            && exact_or_any(&self.criteria.department, &doc.department)
            && exact_or_any(&self.criteria.proposer, &doc.proposer_name)
            && self.matches_permission(doc)
            && self.dates.matches(doc.submission_date)
    }

    fn matches_search(&self, doc: &DocumentRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        [&doc.objective, &doc.proposer_name, &doc.doc_number]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.search))
    }

    fn matches_permission(&self, doc: &DocumentRecord) -> bool {
        let status = doc.permission_status(self.catalog);
        if self.criteria.pending_only && status != PermissionStatus::Pending {
            return false;
        }
        self.criteria.permission.is_empty() || status.display_name() == self.criteria.permission
    }
}

fn exact_or_any(expected: &str, actual: &str) -> bool {
    expected.is_empty() || expected == actual
}
