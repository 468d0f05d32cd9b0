use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emmaus_auth_types::identity::IdentityHeaders;
use emmaus_domain::role::ORG_ADMINS;

use crate::error::LearningServiceError;
use crate::handlers::{ListQuery, require_role};
use crate::state::AppState;
use crate::usecase::group::{
    AssignMemberUseCase, CreateGroupInput, CreateGroupUseCase, DeleteGroupUseCase,
    ListGroupsUseCase, RemoveMemberUseCase, UpdateGroupUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct GroupResponse {
    pub id: Uuid,
    pub name: String,
    pub region_id: Uuid,
    #[serde(serialize_with = "emmaus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "emmaus_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<crate::domain::types::Group> for GroupResponse {
    fn from(group: crate::domain::types::Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
            region_id: group.region_id,
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}

// ── GET /groups ──────────────────────────────────────────────────────────────

pub async fn get_groups(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<GroupResponse>>, LearningServiceError> {
    require_role(&identity, ORG_ADMINS)?;
    let query = ListQuery::from_raw(raw_query.as_deref())?;
    let usecase = ListGroupsUseCase {
        repo: state.group_repo(),
    };
    let groups = usecase.execute(query.page_request()).await?;
    Ok(Json(groups.into_iter().map(Into::into).collect()))
}

// ── POST /groups ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub region_id: Uuid,
}

pub async fn create_group(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), LearningServiceError> {
    require_role(&identity, ORG_ADMINS)?;
    let usecase = CreateGroupUseCase {
        groups: state.group_repo(),
        regions: state.region_repo(),
    };
    let group = usecase
        .execute(CreateGroupInput {
            name: body.name,
            region_id: body.region_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(group.into())))
}

// ── PATCH /groups/{id} ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateGroupRequest {
    pub name: String,
}

pub async fn update_group(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateGroupRequest>,
) -> Result<Json<GroupResponse>, LearningServiceError> {
    require_role(&identity, ORG_ADMINS)?;
    let usecase = UpdateGroupUseCase {
        repo: state.group_repo(),
    };
    let group = usecase.execute(id, body.name).await?;
    Ok(Json(group.into()))
}

// ── DELETE /groups/{id} ──────────────────────────────────────────────────────

pub async fn delete_group(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, LearningServiceError> {
    require_role(&identity, ORG_ADMINS)?;
    let usecase = DeleteGroupUseCase {
        repo: state.group_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /groups/{id}/users ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct MembershipRequest {
    pub user_id: Uuid,
}

pub async fn assign_member(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<MembershipRequest>,
) -> Result<StatusCode, LearningServiceError> {
    require_role(&identity, ORG_ADMINS)?;
    let usecase = AssignMemberUseCase {
        groups: state.group_repo(),
        users: state.user_repo(),
    };
    usecase.execute(id, body.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /groups/{id}/users ────────────────────────────────────────────────

pub async fn remove_member(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<MembershipRequest>,
) -> Result<StatusCode, LearningServiceError> {
    require_role(&identity, ORG_ADMINS)?;
    let usecase = RemoveMemberUseCase {
        groups: state.group_repo(),
        users: state.user_repo(),
    };
    usecase.execute(id, body.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
