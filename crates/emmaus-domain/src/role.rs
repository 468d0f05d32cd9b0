//! User roles and per-operation authorization allow-lists.

use serde::{Deserialize, Serialize};

/// Administrative role of a user.
///
/// Wire format: `u8` (0 = User .. 4 = RootAdmin). Unknown values are rejected
/// by [`Role::from_u8`], never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User = 0,
    LocalAdmin = 1,
    RegionalAdmin = 2,
    SuperAdmin = 3,
    RootAdmin = 4,
}

/// Roles allowed to manage dioceses and change user roles.
pub const DIOCESE_ADMINS: &[Role] = &[Role::RootAdmin, Role::SuperAdmin];

/// Roles allowed to manage regions, groups, and their membership.
pub const ORG_ADMINS: &[Role] = &[
    Role::RootAdmin,
    Role::SuperAdmin,
    Role::RegionalAdmin,
    Role::LocalAdmin,
];

impl Role {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::User),
            1 => Some(Self::LocalAdmin),
            2 => Some(Self::RegionalAdmin),
            3 => Some(Self::SuperAdmin),
            4 => Some(Self::RootAdmin),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Membership test against an operation's allow-list.
    ///
    /// Authorization is NOT a rank comparison: each operation declares its own
    /// fixed set of permitted roles, and the sets are not guaranteed to be
    /// monotone in privilege level.
    pub fn is_allowed(self, allowed: &[Role]) -> bool {
        allowed.contains(&self)
    }
}
