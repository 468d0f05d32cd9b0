use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emmaus_auth_types::identity::IdentityHeaders;
use emmaus_domain::role::{DIOCESE_ADMINS, Role};

use crate::error::LearningServiceError;
use crate::handlers::{require_role, require_self_or};
use crate::state::AppState;
use crate::usecase::user::{
    GetUserUseCase, RegisterUserInput, RegisterUserUseCase, UpdatePasswordUseCase,
    UpdateRoleUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: u8,
    pub group_id: Option<Uuid>,
    pub completed_units: u32,
    #[serde(serialize_with = "emmaus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "emmaus_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<crate::domain::types::User> for UserResponse {
    fn from(user: crate::domain::types::User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role.as_u8(),
            group_id: user.group_id,
            completed_units: user.completed_units,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Sign-up. The only route on the surface that takes no identity headers.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), LearningServiceError> {
    let usecase = RegisterUserUseCase {
        users: state.user_repo(),
        auth: state.auth_provider(),
    };
    let user = usecase
        .execute(RegisterUserInput {
            email: body.email,
            name: body.name,
            password: body.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, LearningServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(user.into()))
}

// ── PATCH /users/{id}/role ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    pub role: u8,
}

pub async fn update_role(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<StatusCode, LearningServiceError> {
    require_role(&identity, DIOCESE_ADMINS)?;
    let role = Role::from_u8(body.role).ok_or(LearningServiceError::InvalidRole)?;
    let usecase = UpdateRoleUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(id, role).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PATCH /users/{id}/password ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: String,
}

pub async fn update_password(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePasswordRequest>,
) -> Result<StatusCode, LearningServiceError> {
    require_self_or(&identity, id, DIOCESE_ADMINS)?;
    let usecase = UpdatePasswordUseCase {
        users: state.user_repo(),
        auth: state.auth_provider(),
    };
    usecase.execute(id, body.password).await?;
    Ok(StatusCode::NO_CONTENT)
}
