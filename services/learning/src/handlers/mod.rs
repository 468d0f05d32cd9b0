pub mod diocese;
pub mod group;
pub mod manager;
pub mod progress;
pub mod region;
pub mod user;

use uuid::Uuid;

use emmaus_auth_types::identity::IdentityHeaders;
use emmaus_domain::role::Role;

use crate::error::LearningServiceError;

/// Allow-list gate shared by all admin handlers. An unknown role value on the
/// wire is treated as no privilege at all.
pub(crate) fn require_role(
    identity: &IdentityHeaders,
    allowed: &[Role],
) -> Result<(), LearningServiceError> {
    let role = Role::from_u8(identity.user_role).ok_or(LearningServiceError::Forbidden)?;
    if !role.is_allowed(allowed) {
        return Err(LearningServiceError::Forbidden);
    }
    Ok(())
}

/// Callers may always act on their own resources; anyone else must pass the
/// allow-list.
pub(crate) fn require_self_or(
    identity: &IdentityHeaders,
    target: Uuid,
    allowed: &[Role],
) -> Result<(), LearningServiceError> {
    if identity.user_id == target {
        return Ok(());
    }
    require_role(identity, allowed)
}

#[derive(serde::Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct ListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl ListQuery {
    pub(crate) fn from_raw(raw: Option<&str>) -> Result<Self, LearningServiceError> {
        raw.map(serde_qs::from_str)
            .transpose()
            .map_err(|_| LearningServiceError::MissingData)
            .map(Option::unwrap_or_default)
    }

    pub(crate) fn page_request(&self) -> emmaus_domain::pagination::PageRequest {
        emmaus_domain::pagination::PageRequest {
            per_page: self.per_page.unwrap_or(50),
            page: self.page.unwrap_or(1),
        }
    }
}
