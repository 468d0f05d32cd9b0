use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emmaus_auth_types::identity::IdentityHeaders;
use emmaus_domain::role::DIOCESE_ADMINS;

use crate::error::LearningServiceError;
use crate::handlers::{ListQuery, require_role};
use crate::state::AppState;
use crate::usecase::diocese::{
    CreateDioceseInput, CreateDioceseUseCase, DeleteDioceseUseCase, ListDiocesesUseCase,
    UpdateDioceseUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DioceseResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(serialize_with = "emmaus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "emmaus_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<crate::domain::types::Diocese> for DioceseResponse {
    fn from(diocese: crate::domain::types::Diocese) -> Self {
        Self {
            id: diocese.id,
            name: diocese.name,
            created_at: diocese.created_at,
            updated_at: diocese.updated_at,
        }
    }
}

// ── GET /dioceses ────────────────────────────────────────────────────────────

pub async fn get_dioceses(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<DioceseResponse>>, LearningServiceError> {
    require_role(&identity, DIOCESE_ADMINS)?;
    let query = ListQuery::from_raw(raw_query.as_deref())?;
    let usecase = ListDiocesesUseCase {
        repo: state.diocese_repo(),
    };
    let dioceses = usecase.execute(query.page_request()).await?;
    Ok(Json(dioceses.into_iter().map(Into::into).collect()))
}

// ── POST /dioceses ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateDioceseRequest {
    pub name: String,
}

pub async fn create_diocese(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateDioceseRequest>,
) -> Result<(StatusCode, Json<DioceseResponse>), LearningServiceError> {
    require_role(&identity, DIOCESE_ADMINS)?;
    let usecase = CreateDioceseUseCase {
        repo: state.diocese_repo(),
    };
    let diocese = usecase
        .execute(CreateDioceseInput { name: body.name })
        .await?;
    Ok((StatusCode::CREATED, Json(diocese.into())))
}

// ── PATCH /dioceses/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateDioceseRequest {
    pub name: String,
}

pub async fn update_diocese(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateDioceseRequest>,
) -> Result<Json<DioceseResponse>, LearningServiceError> {
    require_role(&identity, DIOCESE_ADMINS)?;
    let usecase = UpdateDioceseUseCase {
        repo: state.diocese_repo(),
    };
    let diocese = usecase.execute(id, body.name).await?;
    Ok(Json(diocese.into()))
}

// ── DELETE /dioceses/{id} ────────────────────────────────────────────────────

pub async fn delete_diocese(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, LearningServiceError> {
    require_role(&identity, DIOCESE_ADMINS)?;
    let usecase = DeleteDioceseUseCase {
        repo: state.diocese_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
