use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use emmaus_domain::pagination::PageRequest;
use emmaus_domain::role::Role;
use emmaus_learning::domain::repository::{
    DioceseRepository, GroupRepository, ManagerRepository, ProgressRepository, RegionRepository,
    UserRepository,
};
use emmaus_learning::domain::types::{
    CascadePlan, Diocese, EntityKind, Group, QuestionProgress, Region, UnitProgress, User,
};
use emmaus_learning::error::LearningServiceError;

// ── InMemoryOrg ──────────────────────────────────────────────────────────────

/// Shared in-memory stand-in for the whole org store. Cloning shares the
/// underlying state, so usecases holding several repo handles all see the
/// same data.
#[derive(Clone, Default)]
pub struct InMemoryOrg {
    pub dioceses: Arc<Mutex<Vec<Diocese>>>,
    pub regions: Arc<Mutex<Vec<Region>>>,
    pub groups: Arc<Mutex<Vec<Group>>>,
    pub users: Arc<Mutex<Vec<User>>>,
    /// (kind, entity id, user id)
    pub managers: Arc<Mutex<Vec<(EntityKind, Uuid, Uuid)>>>,
}

impl InMemoryOrg {
    pub fn manager_ids(&self, kind: EntityKind, entity_id: Uuid) -> Vec<Uuid> {
        self.managers
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, e, _)| *k == kind && *e == entity_id)
            .map(|(_, _, u)| *u)
            .collect()
    }
}

impl DioceseRepository for InMemoryOrg {
    async fn list(&self, _page: PageRequest) -> Result<Vec<Diocese>, LearningServiceError> {
        Ok(self.dioceses.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Diocese>, LearningServiceError> {
        Ok(self.dioceses.lock().unwrap().iter().find(|d| d.id == id).cloned())
    }

    async fn create(&self, diocese: &Diocese) -> Result<(), LearningServiceError> {
        self.dioceses.lock().unwrap().push(diocese.clone());
        Ok(())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<bool, LearningServiceError> {
        let mut dioceses = self.dioceses.lock().unwrap();
        match dioceses.iter_mut().find(|d| d.id == id) {
            Some(d) => {
                d.name = name.to_owned();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn plan_cascade(&self, id: Uuid) -> Result<CascadePlan, LearningServiceError> {
        let region_ids: Vec<Uuid> = self
            .regions
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.diocese_id == id)
            .map(|r| r.id)
            .collect();
        let group_ids = self
            .groups
            .lock()
            .unwrap()
            .iter()
            .filter(|g| region_ids.contains(&g.region_id))
            .map(|g| g.id)
            .collect();
        Ok(CascadePlan {
            region_ids,
            group_ids,
        })
    }

    async fn delete_cascade(
        &self,
        id: Uuid,
        plan: &CascadePlan,
    ) -> Result<(), LearningServiceError> {
        for user in self.users.lock().unwrap().iter_mut() {
            if user.group_id.is_some_and(|g| plan.group_ids.contains(&g)) {
                user.group_id = None;
            }
        }
        self.managers.lock().unwrap().retain(|(kind, entity, _)| {
            !(*kind == EntityKind::Diocese && *entity == id)
                && !(*kind == EntityKind::Region && plan.region_ids.contains(entity))
                && !(*kind == EntityKind::Group && plan.group_ids.contains(entity))
        });
        self.groups
            .lock()
            .unwrap()
            .retain(|g| !plan.group_ids.contains(&g.id));
        self.regions
            .lock()
            .unwrap()
            .retain(|r| !plan.region_ids.contains(&r.id));
        self.dioceses.lock().unwrap().retain(|d| d.id != id);
        Ok(())
    }
}

impl RegionRepository for InMemoryOrg {
    async fn list(&self, _page: PageRequest) -> Result<Vec<Region>, LearningServiceError> {
        Ok(self.regions.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Region>, LearningServiceError> {
        Ok(self.regions.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, region: &Region) -> Result<(), LearningServiceError> {
        self.regions.lock().unwrap().push(region.clone());
        Ok(())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<bool, LearningServiceError> {
        let mut regions = self.regions.lock().unwrap();
        match regions.iter_mut().find(|r| r.id == id) {
            Some(r) => {
                r.name = name.to_owned();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn plan_cascade(&self, id: Uuid) -> Result<CascadePlan, LearningServiceError> {
        let group_ids = self
            .groups
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.region_id == id)
            .map(|g| g.id)
            .collect();
        Ok(CascadePlan {
            region_ids: vec![],
            group_ids,
        })
    }

    async fn delete_cascade(
        &self,
        id: Uuid,
        plan: &CascadePlan,
    ) -> Result<(), LearningServiceError> {
        for user in self.users.lock().unwrap().iter_mut() {
            if user.group_id.is_some_and(|g| plan.group_ids.contains(&g)) {
                user.group_id = None;
            }
        }
        self.managers.lock().unwrap().retain(|(kind, entity, _)| {
            !(*kind == EntityKind::Region && *entity == id)
                && !(*kind == EntityKind::Group && plan.group_ids.contains(entity))
        });
        self.groups
            .lock()
            .unwrap()
            .retain(|g| !plan.group_ids.contains(&g.id));
        self.regions.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

impl GroupRepository for InMemoryOrg {
    async fn list(&self, _page: PageRequest) -> Result<Vec<Group>, LearningServiceError> {
        Ok(self.groups.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, LearningServiceError> {
        Ok(self.groups.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn create(&self, group: &Group) -> Result<(), LearningServiceError> {
        self.groups.lock().unwrap().push(group.clone());
        Ok(())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<bool, LearningServiceError> {
        let mut groups = self.groups.lock().unwrap();
        match groups.iter_mut().find(|g| g.id == id) {
            Some(g) => {
                g.name = name.to_owned();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_detaching_members(&self, id: Uuid) -> Result<bool, LearningServiceError> {
        let existed = self.groups.lock().unwrap().iter().any(|g| g.id == id);
        for user in self.users.lock().unwrap().iter_mut() {
            if user.group_id == Some(id) {
                user.group_id = None;
            }
        }
        self.managers
            .lock()
            .unwrap()
            .retain(|(kind, entity, _)| !(*kind == EntityKind::Group && *entity == id));
        self.groups.lock().unwrap().retain(|g| g.id != id);
        Ok(existed)
    }

    async fn assign_member(&self, id: Uuid, user_id: Uuid) -> Result<(), LearningServiceError> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == user_id) {
            user.group_id = Some(id);
        }
        Ok(())
    }

    async fn remove_member(&self, user_id: Uuid) -> Result<(), LearningServiceError> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == user_id) {
            user.group_id = None;
        }
        Ok(())
    }
}

impl ManagerRepository for InMemoryOrg {
    async fn list(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
    ) -> Result<Vec<Uuid>, LearningServiceError> {
        Ok(self.manager_ids(kind, entity_id))
    }

    async fn replace(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
        user_ids: &[Uuid],
    ) -> Result<(), LearningServiceError> {
        let mut managers = self.managers.lock().unwrap();
        managers.retain(|(k, e, _)| !(*k == kind && *e == entity_id));
        managers.extend(user_ids.iter().map(|u| (kind, entity_id, *u)));
        Ok(())
    }
}

impl UserRepository for InMemoryOrg {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, LearningServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, LearningServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: &User) -> Result<(), LearningServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update_role(&self, id: Uuid, role: Role) -> Result<bool, LearningServiceError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(u) => {
                u.role = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exist_all(&self, ids: &[Uuid]) -> Result<bool, LearningServiceError> {
        let users = self.users.lock().unwrap();
        Ok(ids.iter().all(|id| users.iter().any(|u| u.id == *id)))
    }
}

// ── MockProgressStore ────────────────────────────────────────────────────────

/// Stateful progress store mirroring the real one's derived-summary behavior.
#[derive(Clone, Default)]
pub struct MockProgressStore {
    pub units: Arc<Mutex<Vec<UnitProgress>>>,
    pub questions: Arc<Mutex<Vec<QuestionProgress>>>,
    pub completed_units: Arc<Mutex<u32>>,
}

impl MockProgressStore {
    fn recompute(&self, user_id: Uuid) {
        let count = self
            .units
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id && r.complete())
            .count() as u32;
        *self.completed_units.lock().unwrap() = count;
    }
}

impl ProgressRepository for MockProgressStore {
    async fn list_units(&self, user_id: Uuid) -> Result<Vec<UnitProgress>, LearningServiceError> {
        Ok(self
            .units
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn upsert_unit(&self, row: &UnitProgress) -> Result<(), LearningServiceError> {
        {
            let mut units = self.units.lock().unwrap();
            units.retain(|r| {
                !(r.user_id == row.user_id
                    && r.chapter_id == row.chapter_id
                    && r.unit_id == row.unit_id)
            });
            units.push(row.clone());
        }
        self.recompute(row.user_id);
        Ok(())
    }

    async fn mark_video(
        &self,
        user_id: Uuid,
        chapter_id: &str,
        unit_id: &str,
        total_questions: u32,
    ) -> Result<UnitProgress, LearningServiceError> {
        let row = {
            let mut units = self.units.lock().unwrap();
            match units.iter_mut().find(|r| {
                r.user_id == user_id && r.chapter_id == chapter_id && r.unit_id == unit_id
            }) {
                Some(row) => {
                    row.video_completed = true;
                    row.updated_at = Utc::now();
                    row.clone()
                }
                None => {
                    let now = Utc::now();
                    let row = UnitProgress {
                        user_id,
                        chapter_id: chapter_id.to_owned(),
                        unit_id: unit_id.to_owned(),
                        video_completed: true,
                        questions_completed: 0,
                        total_questions,
                        created_at: now,
                        updated_at: now,
                    };
                    units.push(row.clone());
                    row
                }
            }
        };
        self.recompute(user_id);
        Ok(row)
    }

    async fn upsert_question(
        &self,
        row: &QuestionProgress,
    ) -> Result<(), LearningServiceError> {
        let mut questions = self.questions.lock().unwrap();
        questions.retain(|q| !(q.user_id == row.user_id && q.question_id == row.question_id));
        questions.push(row.clone());
        Ok(())
    }

    async fn reset(&self, user_id: Uuid) -> Result<(), LearningServiceError> {
        self.units.lock().unwrap().retain(|r| r.user_id != user_id);
        self.questions.lock().unwrap().retain(|q| q.user_id != user_id);
        *self.completed_units.lock().unwrap() = 0;
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user(role: Role) -> User {
    User {
        id: Uuid::now_v7(),
        email: format!("user-{}@example.com", Uuid::now_v7()),
        name: "Test User".to_owned(),
        role,
        group_id: None,
        completed_units: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_diocese(name: &str) -> Diocese {
    Diocese {
        id: Uuid::now_v7(),
        name: name.to_owned(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_region(name: &str, diocese_id: Uuid) -> Region {
    Region {
        id: Uuid::now_v7(),
        name: name.to_owned(),
        diocese_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_group(name: &str, region_id: Uuid) -> Group {
    Group {
        id: Uuid::now_v7(),
        name: name.to_owned(),
        region_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
