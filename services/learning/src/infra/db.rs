use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use emmaus_domain::pagination::PageRequest;
use emmaus_domain::role::Role;
use emmaus_learning_schema::{
    dioceses, groups, managers, question_progress, regions, unit_progress, users,
};

use crate::domain::repository::{
    DioceseRepository, GroupRepository, ManagerRepository, ProgressRepository, RegionRepository,
    UserRepository,
};
use crate::domain::types::{
    CascadePlan, Diocese, EntityKind, Group, QuestionProgress, Region, UnitProgress, User,
};
use crate::error::LearningServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, LearningServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, LearningServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &User) -> Result<(), LearningServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            role: Set(user.role.as_u8() as i16),
            group_id: Set(user.group_id),
            completed_units: Set(user.completed_units as i32),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update_role(&self, id: Uuid, role: Role) -> Result<bool, LearningServiceError> {
        let result = users::Entity::update_many()
            .filter(users::Column::Id.eq(id))
            .col_expr(users::Column::Role, Expr::value(role.as_u8() as i16))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(&self.db)
            .await
            .context("update user role")?;
        Ok(result.rows_affected > 0)
    }

    async fn exist_all(&self, ids: &[Uuid]) -> Result<bool, LearningServiceError> {
        if ids.is_empty() {
            return Ok(true);
        }
        let mut unique = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();
        let found = users::Entity::find()
            .filter(users::Column::Id.is_in(unique.iter().copied()))
            .count(&self.db)
            .await
            .context("count users by ids")?;
        Ok(found == unique.len() as u64)
    }
}

fn user_from_model(model: users::Model) -> Result<User, LearningServiceError> {
    let role = Role::from_u8(model.role as u8)
        .with_context(|| format!("unknown role value {} for user {}", model.role, model.id))?;
    Ok(User {
        id: model.id,
        email: model.email,
        name: model.name,
        role,
        group_id: model.group_id,
        completed_units: model.completed_units.max(0) as u32,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Diocese repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDioceseRepository {
    pub db: DatabaseConnection,
}

impl DioceseRepository for DbDioceseRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Diocese>, LearningServiceError> {
        let models = dioceses::Entity::find()
            .order_by_asc(dioceses::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list dioceses")?;
        Ok(models.into_iter().map(diocese_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Diocese>, LearningServiceError> {
        let model = dioceses::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find diocese by id")?;
        Ok(model.map(diocese_from_model))
    }

    async fn create(&self, diocese: &Diocese) -> Result<(), LearningServiceError> {
        dioceses::ActiveModel {
            id: Set(diocese.id),
            name: Set(diocese.name.clone()),
            created_at: Set(diocese.created_at),
            updated_at: Set(diocese.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create diocese")?;
        Ok(())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<bool, LearningServiceError> {
        let result = dioceses::Entity::update_many()
            .filter(dioceses::Column::Id.eq(id))
            .col_expr(dioceses::Column::Name, Expr::value(name))
            .col_expr(dioceses::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(&self.db)
            .await
            .context("update diocese name")?;
        Ok(result.rows_affected > 0)
    }

    async fn plan_cascade(&self, id: Uuid) -> Result<CascadePlan, LearningServiceError> {
        let region_ids: Vec<Uuid> = regions::Entity::find()
            .filter(regions::Column::DioceseId.eq(id))
            .all(&self.db)
            .await
            .context("collect diocese regions")?
            .into_iter()
            .map(|r| r.id)
            .collect();
        let group_ids = if region_ids.is_empty() {
            vec![]
        } else {
            groups::Entity::find()
                .filter(groups::Column::RegionId.is_in(region_ids.iter().copied()))
                .all(&self.db)
                .await
                .context("collect diocese groups")?
                .into_iter()
                .map(|g| g.id)
                .collect()
        };
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
        let plan = plan.clone();
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    detach_and_delete(txn, Some(id), &plan).await?;
                    dioceses::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(())
                })
            })
            .await
            .context("delete diocese cascade")?;
        Ok(())
    }
}

fn diocese_from_model(model: dioceses::Model) -> Diocese {
    Diocese {
        id: model.id,
        name: model.name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// Shared cascade body: detach users, drop manager rows, delete groups, then
/// regions. The diocese id is `Some` only for a diocese-rooted cascade.
async fn detach_and_delete(
    txn: &DatabaseTransaction,
    diocese_id: Option<Uuid>,
    plan: &CascadePlan,
) -> Result<(), DbErr> {
    if !plan.group_ids.is_empty() {
        users::Entity::update_many()
            .filter(users::Column::GroupId.is_in(plan.group_ids.iter().copied()))
            .col_expr(users::Column::GroupId, Expr::value(sea_orm::Value::Uuid(None)))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(txn)
            .await?;
    }

    let mut affected = Condition::any();
    if let Some(id) = diocese_id {
        affected = affected.add(
            Condition::all()
                .add(managers::Column::EntityKind.eq(EntityKind::Diocese.as_i16()))
                .add(managers::Column::EntityId.eq(id)),
        );
    }
    if !plan.region_ids.is_empty() {
        affected = affected.add(
            Condition::all()
                .add(managers::Column::EntityKind.eq(EntityKind::Region.as_i16()))
                .add(managers::Column::EntityId.is_in(plan.region_ids.iter().copied())),
        );
    }
    if !plan.group_ids.is_empty() {
        affected = affected.add(
            Condition::all()
                .add(managers::Column::EntityKind.eq(EntityKind::Group.as_i16()))
                .add(managers::Column::EntityId.is_in(plan.group_ids.iter().copied())),
        );
    }
    if !affected.is_empty() {
        managers::Entity::delete_many()
            .filter(affected)
            .exec(txn)
            .await?;
    }

    if !plan.group_ids.is_empty() {
        groups::Entity::delete_many()
            .filter(groups::Column::Id.is_in(plan.group_ids.iter().copied()))
            .exec(txn)
            .await?;
    }
    if !plan.region_ids.is_empty() {
        regions::Entity::delete_many()
            .filter(regions::Column::Id.is_in(plan.region_ids.iter().copied()))
            .exec(txn)
            .await?;
    }
    Ok(())
}

// ── Region repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRegionRepository {
    pub db: DatabaseConnection,
}

impl RegionRepository for DbRegionRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Region>, LearningServiceError> {
        let models = regions::Entity::find()
            .order_by_asc(regions::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list regions")?;
        Ok(models.into_iter().map(region_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Region>, LearningServiceError> {
        let model = regions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find region by id")?;
        Ok(model.map(region_from_model))
    }

    async fn create(&self, region: &Region) -> Result<(), LearningServiceError> {
        regions::ActiveModel {
            id: Set(region.id),
            name: Set(region.name.clone()),
            diocese_id: Set(region.diocese_id),
            created_at: Set(region.created_at),
            updated_at: Set(region.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create region")?;
        Ok(())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<bool, LearningServiceError> {
        let result = regions::Entity::update_many()
            .filter(regions::Column::Id.eq(id))
            .col_expr(regions::Column::Name, Expr::value(name))
            .col_expr(regions::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(&self.db)
            .await
            .context("update region name")?;
        Ok(result.rows_affected > 0)
    }

    async fn plan_cascade(&self, id: Uuid) -> Result<CascadePlan, LearningServiceError> {
        let group_ids = groups::Entity::find()
            .filter(groups::Column::RegionId.eq(id))
            .all(&self.db)
            .await
            .context("collect region groups")?
            .into_iter()
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
        let mut plan = plan.clone();
        plan.region_ids = vec![id];
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move { detach_and_delete(txn, None, &plan).await })
            })
            .await
            .context("delete region cascade")?;
        Ok(())
    }
}

fn region_from_model(model: regions::Model) -> Region {
    Region {
        id: model.id,
        name: model.name,
        diocese_id: model.diocese_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Group repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGroupRepository {
    pub db: DatabaseConnection,
}

impl GroupRepository for DbGroupRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Group>, LearningServiceError> {
        let models = groups::Entity::find()
            .order_by_asc(groups::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list groups")?;
        Ok(models.into_iter().map(group_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, LearningServiceError> {
        let model = groups::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find group by id")?;
        Ok(model.map(group_from_model))
    }

    async fn create(&self, group: &Group) -> Result<(), LearningServiceError> {
        groups::ActiveModel {
            id: Set(group.id),
            name: Set(group.name.clone()),
            region_id: Set(group.region_id),
            created_at: Set(group.created_at),
            updated_at: Set(group.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create group")?;
        Ok(())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<bool, LearningServiceError> {
        let result = groups::Entity::update_many()
            .filter(groups::Column::Id.eq(id))
            .col_expr(groups::Column::Name, Expr::value(name))
            .col_expr(groups::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(&self.db)
            .await
            .context("update group name")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_detaching_members(&self, id: Uuid) -> Result<bool, LearningServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    users::Entity::update_many()
                        .filter(users::Column::GroupId.eq(id))
                        .col_expr(users::Column::GroupId, Expr::value(sea_orm::Value::Uuid(None)))
                        .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
                        .exec(txn)
                        .await?;
                    managers::Entity::delete_many()
                        .filter(managers::Column::EntityKind.eq(EntityKind::Group.as_i16()))
                        .filter(managers::Column::EntityId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = groups::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete group")?;
        Ok(deleted)
    }

    async fn assign_member(&self, id: Uuid, user_id: Uuid) -> Result<(), LearningServiceError> {
        users::Entity::update_many()
            .filter(users::Column::Id.eq(user_id))
            .col_expr(users::Column::GroupId, Expr::value(id))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(&self.db)
            .await
            .context("assign group member")?;
        Ok(())
    }

    async fn remove_member(&self, user_id: Uuid) -> Result<(), LearningServiceError> {
        users::Entity::update_many()
            .filter(users::Column::Id.eq(user_id))
            .col_expr(users::Column::GroupId, Expr::value(sea_orm::Value::Uuid(None)))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(&self.db)
            .await
            .context("remove group member")?;
        Ok(())
    }
}

fn group_from_model(model: groups::Model) -> Group {
    Group {
        id: model.id,
        name: model.name,
        region_id: model.region_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Manager repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbManagerRepository {
    pub db: DatabaseConnection,
}

impl ManagerRepository for DbManagerRepository {
    async fn list(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
    ) -> Result<Vec<Uuid>, LearningServiceError> {
        let models = managers::Entity::find()
            .filter(managers::Column::EntityKind.eq(kind.as_i16()))
            .filter(managers::Column::EntityId.eq(entity_id))
            .order_by_asc(managers::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list managers")?;
        Ok(models.into_iter().map(|m| m.user_id).collect())
    }

    async fn replace(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
        user_ids: &[Uuid],
    ) -> Result<(), LearningServiceError> {
        let user_ids = user_ids.to_vec();
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    managers::Entity::delete_many()
                        .filter(managers::Column::EntityKind.eq(kind.as_i16()))
                        .filter(managers::Column::EntityId.eq(entity_id))
                        .exec(txn)
                        .await?;
                    if !user_ids.is_empty() {
                        let now = Utc::now();
                        let rows = user_ids.into_iter().map(|user_id| managers::ActiveModel {
                            user_id: Set(user_id),
                            entity_kind: Set(kind.as_i16()),
                            entity_id: Set(entity_id),
                            created_at: Set(now),
                        });
                        managers::Entity::insert_many(rows)
                            .exec_without_returning(txn)
                            .await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("replace managers")?;
        Ok(())
    }
}

// ── Progress repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProgressRepository {
    pub db: DatabaseConnection,
}

impl ProgressRepository for DbProgressRepository {
    async fn list_units(&self, user_id: Uuid) -> Result<Vec<UnitProgress>, LearningServiceError> {
        let models = unit_progress::Entity::find()
            .filter(unit_progress::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .context("list unit progress")?;
        Ok(models.into_iter().map(unit_from_model).collect())
    }

    async fn upsert_unit(&self, row: &UnitProgress) -> Result<(), LearningServiceError> {
        let row = row.clone();
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    let am = unit_progress::ActiveModel {
                        user_id: Set(row.user_id),
                        chapter_id: Set(row.chapter_id.clone()),
                        unit_id: Set(row.unit_id.clone()),
                        video_completed: Set(row.video_completed),
                        questions_completed: Set(row.questions_completed as i32),
                        total_questions: Set(row.total_questions as i32),
                        created_at: Set(row.created_at),
                        updated_at: Set(row.updated_at),
                    };
                    unit_progress::Entity::insert(am)
                        .on_conflict(
                            OnConflict::columns([
                                unit_progress::Column::UserId,
                                unit_progress::Column::ChapterId,
                                unit_progress::Column::UnitId,
                            ])
                            .update_columns([
                                unit_progress::Column::VideoCompleted,
                                unit_progress::Column::QuestionsCompleted,
                                unit_progress::Column::TotalQuestions,
                                unit_progress::Column::UpdatedAt,
                            ])
                            .to_owned(),
                        )
                        .exec_without_returning(txn)
                        .await?;
                    recompute_completed_units(txn, row.user_id).await
                })
            })
            .await
            .context("upsert unit progress")?;
        Ok(())
    }

    async fn mark_video(
        &self,
        user_id: Uuid,
        chapter_id: &str,
        unit_id: &str,
        total_questions: u32,
    ) -> Result<UnitProgress, LearningServiceError> {
        let chapter_id = chapter_id.to_owned();
        let unit_id = unit_id.to_owned();
        let model = self
            .db
            .transaction::<_, unit_progress::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let existing = unit_progress::Entity::find_by_id((
                        user_id,
                        chapter_id.clone(),
                        unit_id.clone(),
                    ))
                    .one(txn)
                    .await?;
                    let model = match existing {
                        Some(row) => {
                            let mut am: unit_progress::ActiveModel = row.into();
                            am.video_completed = Set(true);
                            am.updated_at = Set(Utc::now());
                            am.update(txn).await?
                        }
                        None => {
                            let now = Utc::now();
                            unit_progress::ActiveModel {
                                user_id: Set(user_id),
                                chapter_id: Set(chapter_id),
                                unit_id: Set(unit_id),
                                video_completed: Set(true),
                                questions_completed: Set(0),
                                total_questions: Set(total_questions as i32),
                                created_at: Set(now),
                                updated_at: Set(now),
                            }
                            .insert(txn)
                            .await?
                        }
                    };
                    recompute_completed_units(txn, user_id).await?;
                    Ok(model)
                })
            })
            .await
            .context("mark video watched")?;
        Ok(unit_from_model(model))
    }

    async fn upsert_question(
        &self,
        row: &QuestionProgress,
    ) -> Result<(), LearningServiceError> {
        let am = question_progress::ActiveModel {
            user_id: Set(row.user_id),
            question_id: Set(row.question_id.clone()),
            chapter_id: Set(row.chapter_id.clone()),
            unit_id: Set(row.unit_id.clone()),
            attempts: Set(row.attempts as i32),
            incorrect: Set(row.incorrect as i32),
            completed_at: Set(row.completed_at),
        };
        question_progress::Entity::insert(am)
            .on_conflict(
                OnConflict::columns([
                    question_progress::Column::UserId,
                    question_progress::Column::QuestionId,
                ])
                .update_columns([
                    question_progress::Column::ChapterId,
                    question_progress::Column::UnitId,
                    question_progress::Column::Attempts,
                    question_progress::Column::Incorrect,
                    question_progress::Column::CompletedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert question progress")?;
        Ok(())
    }

    async fn reset(&self, user_id: Uuid) -> Result<(), LearningServiceError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    unit_progress::Entity::delete_many()
                        .filter(unit_progress::Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    question_progress::Entity::delete_many()
                        .filter(question_progress::Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    users::Entity::update_many()
                        .filter(users::Column::Id.eq(user_id))
                        .col_expr(users::Column::CompletedUnits, Expr::value(0))
                        .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
                        .exec(txn)
                        .await?;
                    Ok(())
                })
            })
            .await
            .context("reset progress")?;
        Ok(())
    }
}

/// Recount derived unit completions and refresh the user's cached summary.
/// Must run inside the same transaction as the progress write.
async fn recompute_completed_units(
    txn: &DatabaseTransaction,
    user_id: Uuid,
) -> Result<(), DbErr> {
    let rows = unit_progress::Entity::find()
        .filter(unit_progress::Column::UserId.eq(user_id))
        .all(txn)
        .await?;
    let completed = rows
        .iter()
        .filter(|r| r.video_completed && r.questions_completed >= r.total_questions)
        .count() as i32;
    users::Entity::update_many()
        .filter(users::Column::Id.eq(user_id))
        .col_expr(users::Column::CompletedUnits, Expr::value(completed))
        .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
        .exec(txn)
        .await?;
    Ok(())
}

fn unit_from_model(model: unit_progress::Model) -> UnitProgress {
    UnitProgress {
        user_id: model.user_id,
        chapter_id: model.chapter_id,
        unit_id: model.unit_id,
        video_completed: model.video_completed,
        questions_completed: model.questions_completed.max(0) as u32,
        total_questions: model.total_questions.max(0) as u32,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
