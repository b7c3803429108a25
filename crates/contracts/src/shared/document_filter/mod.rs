//! Фильтрация, сортировка и постраничная выдача документов.
//!
//! Чистые функции над снимком коллекции: входные данные не изменяются,
//! результат зависит только от аргументов.

pub mod criteria;

pub use criteria::{DateConstraint, DocumentMatcher, FilterCriteria};

use serde::{Deserialize, Serialize};

use crate::domain::a001_document::aggregate::DocumentRecord;
use crate::shared::status_catalog::StatusCatalog;

/// Размер страницы по умолчанию
pub const ITEMS_PER_PAGE: usize = 10;

/// Одна страница отфильтрованного списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPage {
    pub page_items: Vec<DocumentRecord>,
    /// Число документов, прошедших фильтр (до нарезки на страницы)
    pub total_matched: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Отфильтровать и отсортировать по дате подачи, новые первыми.
///
/// Сортировка устойчивая: документы с одинаковой датой сохраняют исходный
/// порядок. Документы без даты идут в конце.
pub fn filter_documents<'a>(
    documents: &'a [DocumentRecord],
    criteria: &FilterCriteria,
    catalog: &StatusCatalog,
) -> Vec<&'a DocumentRecord> {
    let matcher = criteria.compile(catalog);
    let mut matched: Vec<&DocumentRecord> =
        documents.iter().filter(|doc| matcher.matches(doc)).collect();
    matched.sort_by(|a, b| b.submission_date.cmp(&a.submission_date));
    matched
}

/// Срез `[(page-1)*page_size, page*page_size)`.
///
/// Страницы нумеруются с 1. Страница за пределами списка (а также
/// страница 0 и нулевой размер) дают пустой срез, номер не корректируется.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size));
    match start {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}

/// Количество страниц: `ceil(total / page_size)`
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Фильтр + страница по заданному справочнику статусов
pub fn filter_and_paginate_with(
    catalog: &StatusCatalog,
    documents: &[DocumentRecord],
    criteria: &FilterCriteria,
    page: usize,
    page_size: usize,
) -> DocumentPage {
    let matched = filter_documents(documents, criteria, catalog);
    let page_items = paginate(&matched, page, page_size)
        .iter()
        .map(|doc| (*doc).clone())
        .collect();
    DocumentPage {
        page_items,
        total_matched: matched.len(),
        page,
        page_size,
        total_pages: total_pages(matched.len(), page_size),
    }
}

/// Фильтр + страница по встроенному справочнику статусов
pub fn filter_and_paginate(
    documents: &[DocumentRecord],
    criteria: &FilterCriteria,
    page: usize,
    page_size: usize,
) -> DocumentPage {
    filter_and_paginate_with(StatusCatalog::builtin(), documents, criteria, page, page_size)
}
