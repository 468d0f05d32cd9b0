use chrono::Utc;
use uuid::Uuid;

use emmaus_domain::pagination::PageRequest;

use crate::domain::repository::DioceseRepository;
use crate::domain::types::Diocese;
use crate::error::LearningServiceError;

// ── CreateDiocese ────────────────────────────────────────────────────────────

pub struct CreateDioceseInput {
    pub name: String,
}

pub struct CreateDioceseUseCase<R: DioceseRepository> {
    pub repo: R,
}

impl<R: DioceseRepository> CreateDioceseUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateDioceseInput,
    ) -> Result<Diocese, LearningServiceError> {
        if input.name.trim().is_empty() {
            return Err(LearningServiceError::MissingData);
        }
        let now = Utc::now();
        let diocese = Diocese {
            id: Uuid::now_v7(),
            name: input.name,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&diocese).await?;
        Ok(diocese)
    }
}

// ── ListDioceses ─────────────────────────────────────────────────────────────

pub struct ListDiocesesUseCase<R: DioceseRepository> {
    pub repo: R,
}

impl<R: DioceseRepository> ListDiocesesUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Diocese>, LearningServiceError> {
        self.repo.list(page.clamped()).await
    }
}

// ── UpdateDiocese ────────────────────────────────────────────────────────────

pub struct UpdateDioceseUseCase<R: DioceseRepository> {
    pub repo: R,
}

impl<R: DioceseRepository> UpdateDioceseUseCase<R> {
    pub async fn execute(&self, id: Uuid, name: String) -> Result<Diocese, LearningServiceError> {
        if name.trim().is_empty() {
            return Err(LearningServiceError::MissingData);
        }
        if !self.repo.update_name(id, &name).await? {
            return Err(LearningServiceError::DioceseNotFound);
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(LearningServiceError::DioceseNotFound)
    }
}

// ── DeleteDiocese ────────────────────────────────────────────────────────────

pub struct DeleteDioceseUseCase<R: DioceseRepository> {
    pub repo: R,
}

impl<R: DioceseRepository> DeleteDioceseUseCase<R> {
    /// Plan the descendant set first, then hand the whole cascade to the
    /// store as one atomic unit.
    pub async fn execute(&self, id: Uuid) -> Result<(), LearningServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(LearningServiceError::DioceseNotFound)?;
        let plan = self.repo.plan_cascade(id).await?;
        self.repo.delete_cascade(id, &plan).await
    }
}
