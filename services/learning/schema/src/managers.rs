use sea_orm::entity::prelude::*;

/// Manager assignment: a user granted administrative association with one
/// org entity. Polymorphic over the entity kind, so `entity_id` carries no
/// foreign key; cascade deletes clean these rows up explicitly.
///
/// `entity_kind`: 0 = diocese, 1 = region, 2 = group.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "managers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub entity_kind: i16,
    #[sea_orm(primary_key, auto_increment = false)]
    pub entity_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
