use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_regions_diocese_id")
                    .table(Regions::Table)
                    .col(Regions::DioceseId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_groups_region_id")
                    .table(Groups::Table)
                    .col(Groups::RegionId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_group_id")
                    .table(Users::Table)
                    .col(Users::GroupId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_managers_entity")
                    .table(Managers::Table)
                    .col(Managers::EntityKind)
                    .col(Managers::EntityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_managers_entity")
                    .table(Managers::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_users_group_id")
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_groups_region_id")
                    .table(Groups::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_regions_diocese_id")
                    .table(Regions::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Regions {
    Table,
    DioceseId,
}

#[derive(Iden)]
enum Groups {
    Table,
    RegionId,
}

#[derive(Iden)]
enum Users {
    Table,
    GroupId,
}

#[derive(Iden)]
enum Managers {
    Table,
    EntityKind,
    EntityId,
}
