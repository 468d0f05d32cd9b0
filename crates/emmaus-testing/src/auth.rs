//! Mock auth helpers for integration tests.
//!
//! Services behind the gateway receive `x-emmaus-user-id` + `x-emmaus-user-role`
//! headers injected by the gateway. In tests, `MockAuth` builds these headers
//! directly so no real gateway or session is needed.

use http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use emmaus_domain::role::Role;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub role: Role,
}

impl MockAuth {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    /// A fresh identity with the given role.
    pub fn with_role(role: Role) -> Self {
        Self::new(Uuid::now_v7(), role)
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("x-emmaus-user-id"),
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        );
        map.insert(
            HeaderName::from_static("x-emmaus-user-role"),
            HeaderValue::from_str(&self.role.as_u8().to_string()).unwrap(),
        );
        map
    }
}
