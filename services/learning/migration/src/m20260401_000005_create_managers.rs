use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Managers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Managers::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Managers::EntityKind)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Managers::EntityId).uuid().not_null())
                    .col(
                        ColumnDef::new(Managers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(Managers::UserId)
                            .col(Managers::EntityKind)
                            .col(Managers::EntityId),
                    )
                    // EntityId is polymorphic (diocese/region/group) so it
                    // carries no foreign key; cascade deletes clean it up.
                    .foreign_key(
                        ForeignKey::create()
                            .from(Managers::Table, Managers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Managers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Managers {
    Table,
    UserId,
    EntityKind,
    EntityId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
