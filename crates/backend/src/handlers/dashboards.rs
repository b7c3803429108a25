use axum::extract::Query;
use axum::Json;

use contracts::dashboards::d400_document_stats::dto::{DocumentStatsRequest, DocumentStatsResponse};
use contracts::dashboards::d401_proposer_report::dto::{
    ProposerReportRequest, ProposerReportResponse,
};

use crate::dashboards::{d400_document_stats, d401_proposer_report};
use crate::shared::app_context;

/// GET /api/d400/stats
pub async fn document_stats(
    Query(request): Query<DocumentStatsRequest>,
) -> Json<DocumentStatsResponse> {
    Json(d400_document_stats::service::get_stats(
        app_context::get(),
        request,
    ))
}

/// GET /api/d401/proposer_report
pub async fn proposer_report(
    Query(request): Query<ProposerReportRequest>,
) -> Json<ProposerReportResponse> {
    Json(d401_proposer_report::service::get_report(
        app_context::get(),
        request,
    ))
}
