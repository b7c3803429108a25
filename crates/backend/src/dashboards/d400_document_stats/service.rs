use contracts::dashboards::d400_document_stats::dto::{
    DepartmentStats, DocumentStatsRequest, DocumentStatsResponse, StatusCounts,
};
use contracts::domain::a001_document::aggregate::DocumentRecord;
use contracts::shared::dates::buddhist_year;
use contracts::shared::status_catalog::StatusCatalog;

use crate::shared::app_context::AppContext;

/// Статистика по итоговым решениям за год
pub fn get_stats(ctx: &AppContext, request: DocumentStatsRequest) -> DocumentStatsResponse {
    let year = request.year.unwrap_or(ctx.config.ui.report_year);
    let snapshot = ctx.store.current();
    build_stats(&snapshot.documents, &ctx.catalog, year)
}

/// Решение считается по каноническому статусу, так что «Approved» и
/// «อนุมัติแล้ว» попадают в один счётчик. Документы без даты в год не входят.
pub fn build_stats(
    documents: &[DocumentRecord],
    catalog: &StatusCatalog,
    year: i32,
) -> DocumentStatsResponse {
    let mut summary = StatusCounts::default();
    let mut by_department: Vec<DepartmentStats> = Vec::new();

    let in_year = documents
        .iter()
        .filter(|d| d.submission_date.map(buddhist_year) == Some(year));

    for doc in in_year {
        let status = doc.permission_status(catalog);
        summary.add(status);

        let department = doc.department.trim();
        if department.is_empty() {
            continue;
        }
        match by_department.iter_mut().find(|s| s.department == department) {
            Some(stats) => stats.counts.add(status),
            None => {
                let mut counts = StatusCounts::default();
                counts.add(status);
                by_department.push(DepartmentStats {
                    department: department.to_string(),
                    counts,
                });
            }
        }
    }

    // Устойчивая сортировка: при равенстве порядок первого появления
    by_department.sort_by(|a, b| b.counts.total.cmp(&a.counts.total));

    DocumentStatsResponse {
        year,
        summary,
        by_department,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn docs() -> Vec<DocumentRecord> {
        serde_json::from_value(json!([
            {"doc_number": "1", "submission_date": "2024-01-05", "department": "กลุ่มสาระภาษาไทย", "permission": "อนุมัติ"},
            {"doc_number": "2", "submission_date": "2024-02-05", "department": "กลุ่มสาระคณิตศาสตร์", "permission": "Approved"},
            {"doc_number": "3", "submission_date": "2024-03-05", "department": "กลุ่มสาระคณิตศาสตร์", "permission": "ไม่อนุมัติ"},
            {"doc_number": "4", "submission_date": "2024-04-05", "department": "", "permission": ""},
            {"doc_number": "5", "submission_date": "2023-12-31", "department": "กลุ่มสาระภาษาไทย", "permission": "อนุมัติ"},
            {"doc_number": "6", "department": "กลุ่มสาระภาษาไทย", "permission": "อนุมัติ"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_counts_by_canonical_status() {
        let stats = build_stats(&docs(), StatusCatalog::builtin(), 2567);
        assert_eq!(
            stats.summary,
            StatusCounts {
                total: 4,
                pending: 1,
                approved: 2,
                rejected: 1,
            }
        );
    }

    #[test]
    fn test_departments_sorted_by_total() {
        let stats = build_stats(&docs(), StatusCatalog::builtin(), 2567);
        let names: Vec<&str> = stats
            .by_department
            .iter()
            .map(|d| d.department.as_str())
            .collect();
        assert_eq!(names, vec!["กลุ่มสาระคณิตศาสตร์", "กลุ่มสาระภาษาไทย"]);
        assert_eq!(stats.by_department[0].counts.approved, 1);
        assert_eq!(stats.by_department[0].counts.rejected, 1);
    }

    #[test]
    fn test_other_year() {
        let stats = build_stats(&docs(), StatusCatalog::builtin(), 2566);
        assert_eq!(stats.summary.total, 1);
        assert_eq!(stats.year, 2566);
    }

    #[test]
    fn test_department_counts_flatten_in_json() {
        let stats = build_stats(&docs(), StatusCatalog::builtin(), 2567);
        let value = serde_json::to_value(&stats.by_department[1]).unwrap();
        assert_eq!(value["department"], "กลุ่มสาระภาษาไทย");
        assert_eq!(value["total"], 1);
    }
}
