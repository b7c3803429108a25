use serde_json::json;
use std::sync::Arc;

use contracts::domain::a002_staff::aggregate::{proposer_names, StaffDto, StaffRecord};
use contracts::system::auth::User;

use crate::shared::app_context::AppContext;
use crate::shared::error::ServiceError;
use crate::shared::remote::RemoteAction;
use crate::shared::snapshot::Snapshot;
use crate::system::auth::guard;

pub fn list_all(ctx: &AppContext) -> Vec<StaffRecord> {
    ctx.store.current().staff.clone()
}

/// Имена авторов для формы поиска посетителя
pub fn list_proposers(ctx: &AppContext, department: Option<&str>) -> Vec<String> {
    proposer_names(&ctx.store.current().staff, department)
}

pub async fn save(
    ctx: &AppContext,
    user: Option<&User>,
    dto: StaffDto,
) -> Result<Arc<Snapshot>, ServiceError> {
    let user = guard::require_manager(user)?;
    if dto.full_name.trim().is_empty() {
        return Err(ServiceError::Validation("fullName is required".into()));
    }

    let reply = ctx
        .remote
        .call(
            RemoteAction::SaveStaff,
            json!({ "staffData": dto }),
            Some(user),
        )
        .await?;

    let staff: Vec<StaffRecord> = reply.decode()?;
    tracing::info!("Staff saved by '{}', {} records returned", user.username, staff.len());
    Ok(ctx.store.replace_staff(staff))
}

pub async fn delete(
    ctx: &AppContext,
    user: Option<&User>,
    id: &str,
) -> Result<Arc<Snapshot>, ServiceError> {
    let user = guard::require_manager(user)?;
    if !ctx.store.current().staff.iter().any(|s| s.id == id) {
        return Err(ServiceError::NotFound(format!("staff {}", id)));
    }

    let reply = ctx
        .remote
        .call(RemoteAction::DeleteStaff, json!({ "id": id }), Some(user))
        .await?;

    let staff: Vec<StaffRecord> = reply.decode()?;
    tracing::info!("Staff {} deleted by '{}'", id, user.username);
    Ok(ctx.store.replace_staff(staff))
}
