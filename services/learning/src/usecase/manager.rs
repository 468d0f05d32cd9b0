use uuid::Uuid;

use crate::domain::repository::{
    DioceseRepository, GroupRepository, ManagerRepository, RegionRepository, UserRepository,
};
use crate::domain::types::EntityKind;
use crate::error::LearningServiceError;

// ── ReplaceManagers ──────────────────────────────────────────────────────────

pub struct ReplaceManagersInput {
    pub kind: EntityKind,
    pub entity_id: Uuid,
    pub manager_ids: Vec<Uuid>,
}

/// Full-set replacement of an entity's managers.
///
/// The target entity and every supplied user id are validated before the
/// store is touched; any unknown id rejects the whole operation and leaves
/// the stored set unchanged.
pub struct ReplaceManagersUseCase<
    M: ManagerRepository,
    U: UserRepository,
    D: DioceseRepository,
    R: RegionRepository,
    G: GroupRepository,
> {
    pub managers: M,
    pub users: U,
    pub dioceses: D,
    pub regions: R,
    pub groups: G,
}

impl<
    M: ManagerRepository,
    U: UserRepository,
    D: DioceseRepository,
    R: RegionRepository,
    G: GroupRepository,
> ReplaceManagersUseCase<M, U, D, R, G>
{
    pub async fn execute(
        &self,
        input: ReplaceManagersInput,
    ) -> Result<Vec<Uuid>, LearningServiceError> {
        match input.kind {
            EntityKind::Diocese => {
                self.dioceses
                    .find_by_id(input.entity_id)
                    .await?
                    .ok_or(LearningServiceError::DioceseNotFound)?;
            }
            EntityKind::Region => {
                self.regions
                    .find_by_id(input.entity_id)
                    .await?
                    .ok_or(LearningServiceError::RegionNotFound)?;
            }
            EntityKind::Group => {
                self.groups
                    .find_by_id(input.entity_id)
                    .await?
                    .ok_or(LearningServiceError::GroupNotFound)?;
            }
        }
        if !self.users.exist_all(&input.manager_ids).await? {
            return Err(LearningServiceError::UnknownManager);
        }
        self.managers
            .replace(input.kind, input.entity_id, &input.manager_ids)
            .await?;
        self.managers.list(input.kind, input.entity_id).await
    }
}
