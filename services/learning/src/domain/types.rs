use chrono::{DateTime, Utc};
use uuid::Uuid;

use emmaus_domain::progress::unit_complete;
use emmaus_domain::role::Role;

/// Learner record mirrored from the auth provider.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub group_id: Option<Uuid>,
    pub completed_units: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Diocese {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Region {
    pub id: Uuid,
    pub name: String,
    pub diocese_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub region_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Which level of the tree a manager set is attached to.
///
/// Wire format: `i16` column in the managers table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Diocese = 0,
    Region = 1,
    Group = 2,
}

impl EntityKind {
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Diocese),
            1 => Some(Self::Region),
            2 => Some(Self::Group),
            _ => None,
        }
    }

    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Parse the tag used by the generic managers endpoint.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "diocese" => Some(Self::Diocese),
            "region" => Some(Self::Region),
            "group" => Some(Self::Group),
            _ => None,
        }
    }
}

/// Descendant set of a cascading delete, computed before any mutation.
///
/// Apply order inside one transaction: detach users → drop manager rows →
/// delete groups → delete regions → delete the target.
#[derive(Debug, Clone, Default)]
pub struct CascadePlan {
    pub region_ids: Vec<Uuid>,
    pub group_ids: Vec<Uuid>,
}

/// Per-user progress on one unit.
#[derive(Debug, Clone)]
pub struct UnitProgress {
    pub user_id: Uuid,
    pub chapter_id: String,
    pub unit_id: String,
    pub video_completed: bool,
    pub questions_completed: u32,
    pub total_questions: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UnitProgress {
    /// Derived completion flag; never stored.
    pub fn complete(&self) -> bool {
        unit_complete(
            self.video_completed,
            self.questions_completed,
            self.total_questions,
        )
    }
}

/// Per-question quiz detail.
#[derive(Debug, Clone)]
pub struct QuestionProgress {
    pub user_id: Uuid,
    pub question_id: String,
    pub chapter_id: String,
    pub unit_id: String,
    pub attempts: u32,
    pub incorrect: u32,
    pub completed_at: Option<DateTime<Utc>>,
}
