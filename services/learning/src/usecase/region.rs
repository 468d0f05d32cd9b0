use chrono::Utc;
use uuid::Uuid;

use emmaus_domain::pagination::PageRequest;

use crate::domain::repository::{DioceseRepository, RegionRepository};
use crate::domain::types::Region;
use crate::error::LearningServiceError;

// ── CreateRegion ─────────────────────────────────────────────────────────────

pub struct CreateRegionInput {
    pub name: String,
    pub diocese_id: Uuid,
}

pub struct CreateRegionUseCase<R: RegionRepository, D: DioceseRepository> {
    pub regions: R,
    pub dioceses: D,
}

impl<R: RegionRepository, D: DioceseRepository> CreateRegionUseCase<R, D> {
    /// The parent diocese is validated before any write; a missing parent
    /// creates no row.
    pub async fn execute(&self, input: CreateRegionInput) -> Result<Region, LearningServiceError> {
        if input.name.trim().is_empty() {
            return Err(LearningServiceError::MissingData);
        }
        self.dioceses
            .find_by_id(input.diocese_id)
            .await?
            .ok_or(LearningServiceError::DioceseNotFound)?;
        let now = Utc::now();
        let region = Region {
            id: Uuid::now_v7(),
            name: input.name,
            diocese_id: input.diocese_id,
            created_at: now,
            updated_at: now,
        };
        self.regions.create(&region).await?;
        Ok(region)
    }
}

// ── ListRegions ──────────────────────────────────────────────────────────────

pub struct ListRegionsUseCase<R: RegionRepository> {
    pub repo: R,
}

impl<R: RegionRepository> ListRegionsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Region>, LearningServiceError> {
        self.repo.list(page.clamped()).await
    }
}

// ── UpdateRegion ─────────────────────────────────────────────────────────────

pub struct UpdateRegionUseCase<R: RegionRepository> {
    pub repo: R,
}

impl<R: RegionRepository> UpdateRegionUseCase<R> {
    pub async fn execute(&self, id: Uuid, name: String) -> Result<Region, LearningServiceError> {
        if name.trim().is_empty() {
            return Err(LearningServiceError::MissingData);
        }
        if !self.repo.update_name(id, &name).await? {
            return Err(LearningServiceError::RegionNotFound);
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(LearningServiceError::RegionNotFound)
    }
}

// ── DeleteRegion ─────────────────────────────────────────────────────────────

pub struct DeleteRegionUseCase<R: RegionRepository> {
    pub repo: R,
}

impl<R: RegionRepository> DeleteRegionUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), LearningServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(LearningServiceError::RegionNotFound)?;
        let plan = self.repo.plan_cascade(id).await?;
        self.repo.delete_cascade(id, &plan).await
    }
}
