use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Arc;

use contracts::domain::a001_document::aggregate::{DocumentDto, DocumentRecord};
use contracts::enums::{ReviewStage, StatusFamily};
use contracts::shared::document_filter::{filter_and_paginate_with, filter_documents, DocumentPage, FilterCriteria};
use contracts::shared::status_catalog::StatusCatalog;
use contracts::system::auth::User;

use super::export;
use crate::shared::app_context::AppContext;
use crate::shared::error::ServiceError;
use crate::shared::remote::RemoteAction;
use crate::shared::snapshot::Snapshot;
use crate::system::auth::guard;

/// Страница отфильтрованного списка; без размера берётся из настроек
pub fn list_page(
    ctx: &AppContext,
    criteria: &FilterCriteria,
    page: Option<usize>,
    page_size: Option<usize>,
) -> DocumentPage {
    let snapshot = ctx.store.current();
    filter_and_paginate_with(
        &ctx.catalog,
        &snapshot.documents,
        criteria,
        page.unwrap_or(1),
        page_size.unwrap_or(ctx.config.ui.items_per_page),
    )
}

pub fn get_by_number(ctx: &AppContext, doc_number: &str) -> Result<DocumentRecord, ServiceError> {
    ctx.store
        .current()
        .find_document(doc_number)
        .cloned()
        .ok_or_else(|| ServiceError::NotFound(format!("document {}", doc_number)))
}

/// Создание или полная замена документа
pub async fn save(
    ctx: &AppContext,
    user: Option<&User>,
    dto: DocumentDto,
) -> Result<Arc<Snapshot>, ServiceError> {
    let user = guard::require_manager(user)?;
    let snapshot = ctx.store.current();

    let existing = match dto.doc_number.as_deref().map(str::trim) {
        Some(number) if !number.is_empty() => Some(
            snapshot
                .find_document(number)
                .ok_or_else(|| ServiceError::NotFound(format!("document {}", number)))?,
        ),
        _ => None,
    };

    let payload = dto.into_payload(existing, &ctx.catalog, ctx.today());
    let is_new = payload.doc_number.is_none();
    let reply = ctx
        .remote
        .call(
            RemoteAction::SaveDocument,
            json!({ "docData": payload, "fileData": null }),
            Some(user),
        )
        .await?;

    let documents: Vec<DocumentRecord> = reply.decode()?;
    tracing::info!(
        "Document {} by '{}', {} documents returned",
        if is_new { "created" } else { "updated" },
        user.username,
        documents.len()
    );
    Ok(apply_documents(ctx, documents))
}

/// Смена итогового решения (директор или администратор)
pub async fn update_status(
    ctx: &AppContext,
    user: Option<&User>,
    doc_number: &str,
    new_status: &str,
) -> Result<Arc<Snapshot>, ServiceError> {
    let user = guard::require_decider(user)?;
    get_by_number(ctx, doc_number)?;

    let new_status = new_status.trim();
    if ctx.catalog.lookup_permission(new_status).is_none() {
        return Err(ServiceError::Validation(format!(
            "unknown permission status {:?}",
            new_status
        )));
    }

    let reply = ctx
        .remote
        .call(
            RemoteAction::UpdateStatus,
            json!({ "docId": doc_number, "newStatus": new_status }),
            Some(user),
        )
        .await?;

    let documents: Vec<DocumentRecord> = reply.decode()?;
    tracing::info!(
        "Permission of {} set to '{}' by '{}'",
        doc_number,
        new_status,
        user.username
    );
    Ok(apply_documents(ctx, documents))
}

pub async fn delete(
    ctx: &AppContext,
    user: Option<&User>,
    doc_number: &str,
) -> Result<Arc<Snapshot>, ServiceError> {
    let user = guard::require_manager(user)?;
    get_by_number(ctx, doc_number)?;

    let reply = ctx
        .remote
        .call(
            RemoteAction::DeleteDocument,
            json!({ "docId": doc_number }),
            Some(user),
        )
        .await?;

    let documents: Vec<DocumentRecord> = reply.decode()?;
    tracing::info!("Document {} deleted by '{}'", doc_number, user.username);
    Ok(apply_documents(ctx, documents))
}

/// Перечитать все данные из внешнего сервиса
pub async fn refresh(ctx: &AppContext) -> Result<Arc<Snapshot>, ServiceError> {
    let bundle = ctx.remote.fetch_initial().await?;
    report_unrecognized_statuses(&ctx.catalog, &bundle.documents);
    let snapshot = ctx.store.replace_all(bundle);
    tracing::info!(
        "Snapshot refreshed: {} documents, {} staff, {} activity entries",
        snapshot.documents.len(),
        snapshot.staff.len(),
        snapshot.recent_activity.len()
    );
    Ok(snapshot)
}

/// Заменить список документов ответом сервиса
pub fn apply_documents(ctx: &AppContext, documents: Vec<DocumentRecord>) -> Arc<Snapshot> {
    report_unrecognized_statuses(&ctx.catalog, &documents);
    ctx.store.replace_documents(documents)
}

pub fn export_csv(ctx: &AppContext, criteria: &FilterCriteria) -> Result<String, ServiceError> {
    let snapshot = ctx.store.current();
    let docs = filter_documents(&snapshot.documents, criteria, &ctx.catalog);
    export::to_csv(&docs, &ctx.catalog)
}

pub fn export_print_html(ctx: &AppContext, criteria: &FilterCriteria) -> String {
    let snapshot = ctx.store.current();
    let docs = filter_documents(&snapshot.documents, criteria, &ctx.catalog);
    export::to_print_html(&docs, &ctx.catalog, &ctx.config.school, ctx.today())
}

/// Выгрузить отфильтрованный список в новую Google-таблицу.
/// Возвращает ссылку, если сервис её прислал.
pub async fn export_to_sheet(
    ctx: &AppContext,
    user: Option<&User>,
    criteria: &FilterCriteria,
) -> Result<Option<String>, ServiceError> {
    let user = guard::require_manager(user)?;
    let snapshot = ctx.store.current();
    let docs = filter_documents(&snapshot.documents, criteria, &ctx.catalog);
    let count = docs.len();

    let reply = ctx
        .remote
        .call(
            RemoteAction::ExportToGoogleSheet,
            json!({ "docs": docs }),
            Some(user),
        )
        .await?;

    let url = reply.url.clone().or_else(|| {
        reply
            .data
            .get("url")
            .and_then(|v| v.as_str())
            .map(str::to_string)
    });
    match &url {
        Some(url) => tracing::info!("Exported {} documents to {}", count, url),
        None => tracing::warn!("Exported {} documents but the service returned no link", count),
    }
    Ok(url)
}

/// Предупредить о написаниях статусов, которых нет в справочнике.
///
/// Такие значения молча получают статус по умолчанию, поэтому каждое
/// уникальное написание попадает в журнал.
pub fn report_unrecognized_statuses(catalog: &StatusCatalog, documents: &[DocumentRecord]) {
    let mut unknown: BTreeSet<(StatusFamily, &str)> = BTreeSet::new();
    for doc in documents {
        let permission = doc.permission.trim();
        if !permission.is_empty() && catalog.lookup_permission(permission).is_none() {
            unknown.insert((StatusFamily::Permission, permission));
        }
        for stage in ReviewStage::all() {
            let raw = doc.stage_raw(stage).trim();
            if !raw.is_empty() && catalog.lookup_stage(raw).is_none() {
                unknown.insert((StatusFamily::FourStage, raw));
            }
        }
    }
    for (family, raw) in unknown {
        tracing::warn!(
            "Unrecognized {} status {:?}, shown as default",
            family,
            raw
        );
    }
}
