#![allow(async_fn_in_trait)]

use uuid::Uuid;

use emmaus_domain::pagination::PageRequest;
use emmaus_domain::role::Role;

use crate::domain::types::{
    CascadePlan, Diocese, EntityKind, Group, QuestionProgress, Region, UnitProgress, User,
};
use crate::error::LearningServiceError;

/// Repository for learner records.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, LearningServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, LearningServiceError>;
    async fn create(&self, user: &User) -> Result<(), LearningServiceError>;
    /// Returns `false` if no row matched.
    async fn update_role(&self, id: Uuid, role: Role) -> Result<bool, LearningServiceError>;
    /// True iff every id in the slice names an existing user.
    async fn exist_all(&self, ids: &[Uuid]) -> Result<bool, LearningServiceError>;
}

/// Repository for dioceses and their cascading removal.
pub trait DioceseRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Diocese>, LearningServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Diocese>, LearningServiceError>;
    async fn create(&self, diocese: &Diocese) -> Result<(), LearningServiceError>;
    /// Returns `false` if no row matched.
    async fn update_name(&self, id: Uuid, name: &str) -> Result<bool, LearningServiceError>;
    /// Collect every descendant region and group of the diocese.
    async fn plan_cascade(&self, id: Uuid) -> Result<CascadePlan, LearningServiceError>;
    /// Execute detach-then-delete over the plan in one transaction.
    async fn delete_cascade(
        &self,
        id: Uuid,
        plan: &CascadePlan,
    ) -> Result<(), LearningServiceError>;
}

/// Repository for regions.
pub trait RegionRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Region>, LearningServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Region>, LearningServiceError>;
    async fn create(&self, region: &Region) -> Result<(), LearningServiceError>;
    async fn update_name(&self, id: Uuid, name: &str) -> Result<bool, LearningServiceError>;
    /// Collect the region's groups (`region_ids` stays empty).
    async fn plan_cascade(&self, id: Uuid) -> Result<CascadePlan, LearningServiceError>;
    async fn delete_cascade(
        &self,
        id: Uuid,
        plan: &CascadePlan,
    ) -> Result<(), LearningServiceError>;
}

/// Repository for groups and their membership.
pub trait GroupRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Group>, LearningServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, LearningServiceError>;
    async fn create(&self, group: &Group) -> Result<(), LearningServiceError>;
    async fn update_name(&self, id: Uuid, name: &str) -> Result<bool, LearningServiceError>;
    /// Null members' `group_id`, drop manager rows, delete the group — one
    /// transaction. Returns `false` if the group did not exist.
    async fn delete_detaching_members(&self, id: Uuid) -> Result<bool, LearningServiceError>;
    async fn assign_member(&self, id: Uuid, user_id: Uuid) -> Result<(), LearningServiceError>;
    /// Clear the user's `group_id`.
    async fn remove_member(&self, user_id: Uuid) -> Result<(), LearningServiceError>;
}

/// Repository for manager assignments across all entity kinds.
pub trait ManagerRepository: Send + Sync {
    async fn list(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
    ) -> Result<Vec<Uuid>, LearningServiceError>;
    /// Replace the full manager set for the entity in one transaction.
    /// Callers validate the user ids first; no partial apply.
    async fn replace(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
        user_ids: &[Uuid],
    ) -> Result<(), LearningServiceError>;
}

/// Repository for unit and question progress.
pub trait ProgressRepository: Send + Sync {
    async fn list_units(&self, user_id: Uuid) -> Result<Vec<UnitProgress>, LearningServiceError>;
    /// Idempotent overwrite keyed on (user, chapter, unit); recomputes the
    /// user's `completed_units` cache in the same transaction.
    async fn upsert_unit(&self, row: &UnitProgress) -> Result<(), LearningServiceError>;
    /// Set `video_completed` on the keyed row, creating it if absent.
    async fn mark_video(
        &self,
        user_id: Uuid,
        chapter_id: &str,
        unit_id: &str,
        total_questions: u32,
    ) -> Result<UnitProgress, LearningServiceError>;
    /// Idempotent overwrite keyed on (user, question).
    async fn upsert_question(&self, row: &QuestionProgress)
    -> Result<(), LearningServiceError>;
    /// Delete all unit and question rows for the user and zero the cached
    /// summary, in one transaction.
    async fn reset(&self, user_id: Uuid) -> Result<(), LearningServiceError>;
}

/// Port to the external auth provider (consumed, never reimplemented).
pub trait AuthProviderPort: Send + Sync {
    /// Create an identity with email + password; returns the provider id,
    /// which doubles as the local user id.
    async fn create_identity(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Uuid, LearningServiceError>;
    async fn update_password(
        &self,
        user_id: Uuid,
        new_password: &str,
    ) -> Result<(), LearningServiceError>;
}
