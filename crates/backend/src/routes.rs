use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // AUTH
        // ========================================
        .route("/api/auth/login", post(system::handlers::auth::login))
        // ========================================
        // CATALOGS
        // ========================================
        .route("/api/catalogs", get(handlers::catalogs::get_catalogs))
        .route(
            "/api/status/resolve",
            get(handlers::catalogs::resolve_status),
        )
        .route("/api/activity", get(handlers::catalogs::recent_activity))
        // A001 Document handlers
        .route(
            "/api/documents",
            get(handlers::a001_document::list_paginated).post(handlers::a001_document::save),
        )
        .route(
            "/api/documents/export.csv",
            get(handlers::a001_document::export_csv),
        )
        .route("/api/documents/print", get(handlers::a001_document::print))
        .route(
            "/api/documents/export-sheet",
            post(handlers::a001_document::export_to_sheet),
        )
        .route(
            "/api/documents/:doc_number",
            get(handlers::a001_document::get_by_number).delete(handlers::a001_document::delete),
        )
        .route(
            "/api/documents/:doc_number/status",
            post(handlers::a001_document::update_status),
        )
        .route("/api/refresh", post(handlers::a001_document::refresh))
        // A002 Staff handlers
        .route(
            "/api/staff",
            get(handlers::a002_staff::list_all).post(handlers::a002_staff::save),
        )
        .route(
            "/api/staff/proposers",
            get(handlers::a002_staff::list_proposers),
        )
        .route("/api/staff/:id", delete(handlers::a002_staff::delete))
        // ========================================
        // DASHBOARDS
        // ========================================
        .route("/api/d400/stats", get(handlers::dashboards::document_stats))
        .route(
            "/api/d401/proposer_report",
            get(handlers::dashboards::proposer_report),
        )
        // ========================================
        // USECASES
        // ========================================
        .route(
            "/api/u501/import/sheet",
            post(handlers::u501_import_documents::import_from_sheet),
        )
        .route(
            "/api/u501/import/json",
            post(handlers::u501_import_documents::import_from_json),
        )
}
