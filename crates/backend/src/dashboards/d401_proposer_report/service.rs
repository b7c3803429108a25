use contracts::dashboards::d401_proposer_report::dto::{
    DepartmentProposers, ProposerCount, ProposerReportRequest, ProposerReportResponse,
};
use contracts::domain::a001_document::aggregate::DocumentRecord;
use contracts::shared::catalogs::{subject_group_rank, OTHER_GROUP, UNKNOWN_PROPOSER};
use contracts::shared::dates::buddhist_year;

use crate::shared::app_context::AppContext;

pub fn get_report(ctx: &AppContext, request: ProposerReportRequest) -> ProposerReportResponse {
    let year = request.year.unwrap_or(ctx.config.ui.report_year);
    let snapshot = ctx.store.current();
    build_report(&snapshot.documents, year)
}

/// Число документов каждого автора за год (พ.ศ.), сгруппированное по отделу.
///
/// Отдел автора берётся из его первого документа за год. Отделы идут в
/// порядке каталога групп предметов, остальные в конце в порядке появления.
pub fn build_report(documents: &[DocumentRecord], year: i32) -> ProposerReportResponse {
    let in_year: Vec<&DocumentRecord> = documents
        .iter()
        .filter(|d| d.submission_date.map(buddhist_year) == Some(year))
        .collect();

    let mut proposers: Vec<ProposerCount> = Vec::new();
    for doc in &in_year {
        let name = non_empty_or(&doc.proposer_name, UNKNOWN_PROPOSER);
        match proposers.iter_mut().find(|p| p.name == name) {
            Some(p) => p.count += 1,
            None => proposers.push(ProposerCount {
                name: name.to_string(),
                department: non_empty_or(&doc.department, OTHER_GROUP).to_string(),
                count: 1,
            }),
        }
    }
    proposers.sort_by(|a, b| b.count.cmp(&a.count));

    let mut departments: Vec<DepartmentProposers> = Vec::new();
    for proposer in proposers {
        match departments
            .iter_mut()
            .find(|d| d.department == proposer.department)
        {
            Some(d) => d.proposers.push(proposer),
            None => departments.push(DepartmentProposers {
                department: proposer.department.clone(),
                proposers: vec![proposer],
            }),
        }
    }
    departments.sort_by_key(|d| subject_group_rank(&d.department));

    ProposerReportResponse {
        year,
        total_documents: in_year.len(),
        departments,
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn docs() -> Vec<DocumentRecord> {
        serde_json::from_value(json!([
            {"doc_number": "1", "submission_date": "2026-01-05", "department": "ฝ่ายบริหาร", "proposer_name": "ครูซี"},
            {"doc_number": "2", "submission_date": "2026-02-05", "department": "กลุ่มสาระคณิตศาสตร์", "proposer_name": "ครูบี"},
            {"doc_number": "3", "submission_date": "2026-03-05", "department": "กลุ่มสาระภาษาไทย", "proposer_name": "ครูเอ"},
            {"doc_number": "4", "submission_date": "2026-03-06", "department": "กลุ่มสาระภาษาไทย", "proposer_name": "ครูเอ"},
            {"doc_number": "5", "submission_date": "2026-03-07", "department": "", "proposer_name": ""},
            {"doc_number": "6", "submission_date": "2026-03-08", "department": "กลุ่มสาระภาษาไทย", "proposer_name": "ครูดี"},
            {"doc_number": "7", "submission_date": "2025-03-07", "department": "กลุ่มสาระภาษาไทย", "proposer_name": "ครูเอ"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_report_counts_only_the_year() {
        let report = build_report(&docs(), 2569);
        assert_eq!(report.total_documents, 6);
        let thai = report
            .departments
            .iter()
            .find(|d| d.department == "กลุ่มสาระภาษาไทย")
            .unwrap();
        assert_eq!(thai.proposers[0].name, "ครูเอ");
        assert_eq!(thai.proposers[0].count, 2);
        assert_eq!(thai.proposers[1].name, "ครูดี");
    }

    #[test]
    fn test_departments_follow_catalog_order() {
        let report = build_report(&docs(), 2569);
        let names: Vec<&str> = report
            .departments
            .iter()
            .map(|d| d.department.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["กลุ่มสาระคณิตศาสตร์", "กลุ่มสาระภาษาไทย", "อื่นๆ", "ฝ่ายบริหาร"]
        );
    }

    #[test]
    fn test_missing_name_and_department() {
        let report = build_report(&docs(), 2569);
        let other = report
            .departments
            .iter()
            .find(|d| d.department == OTHER_GROUP)
            .unwrap();
        assert_eq!(other.proposers[0].name, UNKNOWN_PROPOSER);
    }

    #[test]
    fn test_empty_year() {
        let report = build_report(&docs(), 2500);
        assert_eq!(report.total_documents, 0);
        assert!(report.departments.is_empty());
    }
}
