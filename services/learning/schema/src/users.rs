use sea_orm::entity::prelude::*;

/// Learner record mirrored from the auth provider on sign-up.
///
/// `completed_units` is a cached summary recomputed whenever unit progress
/// changes; it is never written directly by callers.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub role: i16,
    pub group_id: Option<Uuid>,
    pub completed_units: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::groups::Entity",
        from = "Column::GroupId",
        to = "super::groups::Column::Id"
    )]
    Group,
    #[sea_orm(has_many = "super::managers::Entity")]
    Managers,
    #[sea_orm(has_many = "super::unit_progress::Entity")]
    UnitProgress,
    #[sea_orm(has_many = "super::question_progress::Entity")]
    QuestionProgress,
}

impl Related<super::groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::managers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Managers.def()
    }
}

impl Related<super::unit_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnitProgress.def()
    }
}

impl Related<super::question_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionProgress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
