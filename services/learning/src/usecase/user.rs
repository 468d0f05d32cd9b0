use chrono::Utc;
use uuid::Uuid;

use emmaus_domain::role::Role;

use crate::domain::repository::{AuthProviderPort, UserRepository};
use crate::domain::types::User;
use crate::error::LearningServiceError;

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Sign-up: create the identity at the auth provider first, then mirror a
/// local row carrying the provider id. Provider failure leaves no local row.
pub struct RegisterUserUseCase<U: UserRepository, A: AuthProviderPort> {
    pub users: U,
    pub auth: A,
}

impl<U: UserRepository, A: AuthProviderPort> RegisterUserUseCase<U, A> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, LearningServiceError> {
        if input.email.trim().is_empty()
            || input.name.trim().is_empty()
            || input.password.is_empty()
        {
            return Err(LearningServiceError::MissingData);
        }
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(LearningServiceError::EmailTaken);
        }
        let id = self
            .auth
            .create_identity(&input.email, &input.password)
            .await?;
        let now = Utc::now();
        let user = User {
            id,
            email: input.email,
            name: input.name,
            role: Role::User,
            group_id: None,
            completed_units: 0,
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> GetUserUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, LearningServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(LearningServiceError::UserNotFound)
    }
}

// ── UpdateRole ───────────────────────────────────────────────────────────────

pub struct UpdateRoleUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> UpdateRoleUseCase<U> {
    pub async fn execute(&self, user_id: Uuid, role: Role) -> Result<(), LearningServiceError> {
        if !self.repo.update_role(user_id, role).await? {
            return Err(LearningServiceError::UserNotFound);
        }
        Ok(())
    }
}

// ── UpdatePassword ───────────────────────────────────────────────────────────

pub struct UpdatePasswordUseCase<U: UserRepository, A: AuthProviderPort> {
    pub users: U,
    pub auth: A,
}

impl<U: UserRepository, A: AuthProviderPort> UpdatePasswordUseCase<U, A> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        new_password: String,
    ) -> Result<(), LearningServiceError> {
        if new_password.is_empty() {
            return Err(LearningServiceError::MissingData);
        }
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(LearningServiceError::UserNotFound)?;
        self.auth.update_password(user_id, &new_password).await
    }
}
