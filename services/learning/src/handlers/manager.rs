use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emmaus_auth_types::identity::IdentityHeaders;
use emmaus_domain::role::{DIOCESE_ADMINS, ORG_ADMINS};

use crate::domain::types::EntityKind;
use crate::error::LearningServiceError;
use crate::handlers::require_role;
use crate::state::AppState;
use crate::usecase::manager::{ReplaceManagersInput, ReplaceManagersUseCase};

// ── PATCH /managers ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ReplaceManagersRequest {
    pub kind: String,
    pub entity_id: Uuid,
    pub manager_ids: Vec<Uuid>,
}

#[derive(Serialize)]
pub struct ManagersResponse {
    pub kind: String,
    pub entity_id: Uuid,
    pub manager_ids: Vec<Uuid>,
}

pub async fn replace_managers(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<ReplaceManagersRequest>,
) -> Result<Json<ManagersResponse>, LearningServiceError> {
    let kind = EntityKind::from_tag(&body.kind).ok_or(LearningServiceError::MissingData)?;
    // Diocese manager sets are reserved for the top-level admins; region and
    // group sets follow the broader org allow-list.
    match kind {
        EntityKind::Diocese => require_role(&identity, DIOCESE_ADMINS)?,
        EntityKind::Region | EntityKind::Group => require_role(&identity, ORG_ADMINS)?,
    }
    let usecase = ReplaceManagersUseCase {
        managers: state.manager_repo(),
        users: state.user_repo(),
        dioceses: state.diocese_repo(),
        regions: state.region_repo(),
        groups: state.group_repo(),
    };
    let manager_ids = usecase
        .execute(ReplaceManagersInput {
            kind,
            entity_id: body.entity_id,
            manager_ids: body.manager_ids,
        })
        .await?;
    Ok(Json(ManagersResponse {
        kind: body.kind,
        entity_id: body.entity_id,
        manager_ids,
    }))
}
