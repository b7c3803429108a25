//! Выгрузка отфильтрованного списка: CSV и печатная HTML-таблица (A4, альбомная).

use ammonia::clean_text;
use chrono::NaiveDate;

use contracts::domain::a001_document::aggregate::DocumentRecord;
use contracts::enums::ReviewStage;
use contracts::shared::dates::format_thai_date;
use contracts::shared::status_catalog::StatusCatalog;

use crate::shared::config::SchoolConfig;
use crate::shared::error::ServiceError;

/// Колонки выгрузки в порядке вывода
const COLUMNS: [&str; 14] = [
    "เลขที่เอกสาร",
    "วันที่ส่ง",
    "กลุ่มสาระ/ฝ่าย",
    "ผู้เสนอ",
    "กลุ่มงาน",
    "วัตถุประสงค์",
    "แผนงาน",
    "พัสดุ",
    "การเงิน",
    "งบประมาณ",
    "สถานะ",
    "วันอนุมัติ",
    "หมายเหตุ1",
    "หมายเหตุ2",
];

/// UTF-8 BOM: Excel распознаёт кодировку только по нему
const UTF8_BOM: &str = "\u{feff}";

fn row(doc: &DocumentRecord, catalog: &StatusCatalog) -> [String; 14] {
    let stage = |s: ReviewStage| doc.stage_status(s, catalog).display_name().to_string();
    [
        doc.doc_number.clone(),
        format_thai_date(doc.submission_date),
        doc.department.clone(),
        doc.proposer_name.clone(),
        doc.work_group.clone(),
        doc.objective.clone(),
        stage(ReviewStage::Planning),
        stage(ReviewStage::Procurement),
        stage(ReviewStage::Finance),
        stage(ReviewStage::Budget),
        doc.permission_status(catalog).display_name().to_string(),
        format_thai_date(doc.effective_approval_date(catalog)),
        doc.notes1.clone(),
        doc.notes2.clone(),
    ]
}

/// CSV с тайскими заголовками; статусы в каноническом отображении
pub fn to_csv(docs: &[&DocumentRecord], catalog: &StatusCatalog) -> Result<String, ServiceError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for doc in docs {
        writer.write_record(row(doc, catalog))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ServiceError::Export(e.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|e| ServiceError::Export(e.to_string()))?;
    Ok(format!("{}{}", UTF8_BOM, body))
}

const PRINT_STYLE: &str = r#"
  @page { size: A4 landscape; margin: 10mm; }
  body { font-family: "Sarabun", Arial, sans-serif; padding: 10px; margin: 0; }
  header { display: flex; justify-content: space-between; margin-bottom: 10px; }
  table { width: 100%; border-collapse: collapse; font-size: 12px; }
  th, td { border: 1px solid #ddd; padding: 6px 5px; vertical-align: top; text-align: left; }
  th { background: #f7fafc; font-weight: bold; white-space: nowrap; }
  td { word-break: break-word; white-space: normal; }
  h2 { margin: 0 0 10px 0; font-size: 16px; }
  .empty { text-align: center; padding: 1rem; }
"#;

/// Печатная форма. Всё содержимое ячеек экранируется.
pub fn to_print_html(
    docs: &[&DocumentRecord],
    catalog: &StatusCatalog,
    school: &SchoolConfig,
    printed_on: NaiveDate,
) -> String {
    let head: String = COLUMNS
        .iter()
        .map(|c| format!("<th>{}</th>", clean_text(c)))
        .collect();

    let body: String = if docs.is_empty() {
        format!(
            "<tr><td class=\"empty\" colspan=\"{}\">ไม่พบข้อมูล</td></tr>",
            COLUMNS.len()
        )
    } else {
        docs.iter()
            .map(|doc| {
                let cells: String = row(doc, catalog)
                    .iter()
                    .map(|value| format!("<td>{}</td>", clean_text(value)))
                    .collect();
                format!("<tr>{}</tr>\n", cells)
            })
            .collect()
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>พิมพ์เอกสาร</title>
<style>{style}</style>
</head>
<body>
<header>
  <h2>{school}</h2>
  <div>
    <p>{office}</p>
    <p>วันที่พิมพ์: {printed}</p>
  </div>
</header>
<h2>รายการเอกสาร ({count})</h2>
<table>
<thead><tr>{head}</tr></thead>
<tbody>
{body}</tbody>
</table>
</body>
</html>
"#,
        style = PRINT_STYLE,
        school = clean_text(&school.name),
        office = clean_text(&school.office),
        printed = clean_text(&format_thai_date(Some(printed_on))),
        count = docs.len(),
        head = head,
        body = body,
    )
}
