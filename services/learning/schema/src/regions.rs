use sea_orm::entity::prelude::*;

/// Middle level of the organizational tree; belongs to exactly one diocese.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "regions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub diocese_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dioceses::Entity",
        from = "Column::DioceseId",
        to = "super::dioceses::Column::Id"
    )]
    Diocese,
    #[sea_orm(has_many = "super::groups::Entity")]
    Groups,
}

impl Related<super::dioceses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Diocese.def()
    }
}

impl Related<super::groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Groups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
