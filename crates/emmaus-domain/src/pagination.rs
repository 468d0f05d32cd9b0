//! Pagination for admin list endpoints.

use serde::{Deserialize, Serialize};

/// Pagination parameters shared across all list endpoints.
///
/// - `per_page`: 1–200, default 50
/// - `page`: ≥ 1, default 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_per_page", rename = "per-page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_per_page() -> u32 {
    50
}

fn default_page() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            page: default_page(),
        }
    }
}

impl PageRequest {
    /// Clamp `per_page` to 1–200 and `page` to ≥ 1.
    ///
    /// Call after deserializing from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            per_page: self.per_page.clamp(1, 200),
            page: self.page.max(1),
        }
    }

    /// Row offset for the backing query. Widens before multiplying so an
    /// arbitrary caller-supplied `page` cannot overflow u32.
    pub fn offset(self) -> u64 {
        (self.page.max(1) as u64 - 1) * self.per_page as u64
    }

    /// Row limit for the backing query.
    pub fn limit(self) -> u64 {
        self.per_page as u64
    }
}
