use chrono::Utc;
use uuid::Uuid;

use emmaus_domain::pagination::PageRequest;

use crate::domain::repository::{GroupRepository, RegionRepository, UserRepository};
use crate::domain::types::Group;
use crate::error::LearningServiceError;

// ── CreateGroup ──────────────────────────────────────────────────────────────

pub struct CreateGroupInput {
    pub name: String,
    pub region_id: Uuid,
}

pub struct CreateGroupUseCase<G: GroupRepository, R: RegionRepository> {
    pub groups: G,
    pub regions: R,
}

impl<G: GroupRepository, R: RegionRepository> CreateGroupUseCase<G, R> {
    pub async fn execute(&self, input: CreateGroupInput) -> Result<Group, LearningServiceError> {
        if input.name.trim().is_empty() {
            return Err(LearningServiceError::MissingData);
        }
        self.regions
            .find_by_id(input.region_id)
            .await?
            .ok_or(LearningServiceError::RegionNotFound)?;
        let now = Utc::now();
        let group = Group {
            id: Uuid::now_v7(),
            name: input.name,
            region_id: input.region_id,
            created_at: now,
            updated_at: now,
        };
        self.groups.create(&group).await?;
        Ok(group)
    }
}

// ── ListGroups ───────────────────────────────────────────────────────────────

pub struct ListGroupsUseCase<G: GroupRepository> {
    pub repo: G,
}

impl<G: GroupRepository> ListGroupsUseCase<G> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Group>, LearningServiceError> {
        self.repo.list(page.clamped()).await
    }
}

// ── UpdateGroup ──────────────────────────────────────────────────────────────

pub struct UpdateGroupUseCase<G: GroupRepository> {
    pub repo: G,
}

impl<G: GroupRepository> UpdateGroupUseCase<G> {
    pub async fn execute(&self, id: Uuid, name: String) -> Result<Group, LearningServiceError> {
        if name.trim().is_empty() {
            return Err(LearningServiceError::MissingData);
        }
        if !self.repo.update_name(id, &name).await? {
            return Err(LearningServiceError::GroupNotFound);
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(LearningServiceError::GroupNotFound)
    }
}

// ── DeleteGroup ──────────────────────────────────────────────────────────────

pub struct DeleteGroupUseCase<G: GroupRepository> {
    pub repo: G,
}

impl<G: GroupRepository> DeleteGroupUseCase<G> {
    /// Members are detached inside the same transaction that deletes the
    /// group; no member ever observes a dangling `group_id`.
    pub async fn execute(&self, id: Uuid) -> Result<(), LearningServiceError> {
        if !self.repo.delete_detaching_members(id).await? {
            return Err(LearningServiceError::GroupNotFound);
        }
        Ok(())
    }
}

// ── AssignMember / RemoveMember ──────────────────────────────────────────────

pub struct AssignMemberUseCase<G: GroupRepository, U: UserRepository> {
    pub groups: G,
    pub users: U,
}

impl<G: GroupRepository, U: UserRepository> AssignMemberUseCase<G, U> {
    pub async fn execute(&self, group_id: Uuid, user_id: Uuid) -> Result<(), LearningServiceError> {
        self.groups
            .find_by_id(group_id)
            .await?
            .ok_or(LearningServiceError::GroupNotFound)?;
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(LearningServiceError::UserNotFound)?;
        self.groups.assign_member(group_id, user_id).await
    }
}

pub struct RemoveMemberUseCase<G: GroupRepository, U: UserRepository> {
    pub groups: G,
    pub users: U,
}

impl<G: GroupRepository, U: UserRepository> RemoveMemberUseCase<G, U> {
    /// Removal is scoped to the named group: a user who belongs to some
    /// other group (or none) is left untouched.
    pub async fn execute(&self, group_id: Uuid, user_id: Uuid) -> Result<(), LearningServiceError> {
        self.groups
            .find_by_id(group_id)
            .await?
            .ok_or(LearningServiceError::GroupNotFound)?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(LearningServiceError::UserNotFound)?;
        if user.group_id != Some(group_id) {
            return Err(LearningServiceError::MissingData);
        }
        self.groups.remove_member(user_id).await
    }
}
