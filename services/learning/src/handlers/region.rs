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
use crate::usecase::region::{
    CreateRegionInput, CreateRegionUseCase, DeleteRegionUseCase, ListRegionsUseCase,
    UpdateRegionUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RegionResponse {
    pub id: Uuid,
    pub name: String,
    pub diocese_id: Uuid,
    #[serde(serialize_with = "emmaus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "emmaus_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<crate::domain::types::Region> for RegionResponse {
    fn from(region: crate::domain::types::Region) -> Self {
        Self {
            id: region.id,
            name: region.name,
            diocese_id: region.diocese_id,
            created_at: region.created_at,
            updated_at: region.updated_at,
        }
    }
}

// ── GET /regions ─────────────────────────────────────────────────────────────

pub async fn get_regions(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<RegionResponse>>, LearningServiceError> {
    require_role(&identity, ORG_ADMINS)?;
    let query = ListQuery::from_raw(raw_query.as_deref())?;
    let usecase = ListRegionsUseCase {
        repo: state.region_repo(),
    };
    let regions = usecase.execute(query.page_request()).await?;
    Ok(Json(regions.into_iter().map(Into::into).collect()))
}

// ── POST /regions ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRegionRequest {
    pub name: String,
    pub diocese_id: Uuid,
}

pub async fn create_region(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateRegionRequest>,
) -> Result<(StatusCode, Json<RegionResponse>), LearningServiceError> {
    require_role(&identity, ORG_ADMINS)?;
    let usecase = CreateRegionUseCase {
        regions: state.region_repo(),
        dioceses: state.diocese_repo(),
    };
    let region = usecase
        .execute(CreateRegionInput {
            name: body.name,
            diocese_id: body.diocese_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(region.into())))
}

// ── PATCH /regions/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRegionRequest {
    pub name: String,
}

pub async fn update_region(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRegionRequest>,
) -> Result<Json<RegionResponse>, LearningServiceError> {
    require_role(&identity, ORG_ADMINS)?;
    let usecase = UpdateRegionUseCase {
        repo: state.region_repo(),
    };
    let region = usecase.execute(id, body.name).await?;
    Ok(Json(region.into()))
}

// ── DELETE /regions/{id} ─────────────────────────────────────────────────────

pub async fn delete_region(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, LearningServiceError> {
    require_role(&identity, ORG_ADMINS)?;
    let usecase = DeleteRegionUseCase {
        repo: state.region_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
