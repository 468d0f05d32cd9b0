use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnitProgress::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UnitProgress::UserId).uuid().not_null())
                    .col(ColumnDef::new(UnitProgress::ChapterId).string().not_null())
                    .col(ColumnDef::new(UnitProgress::UnitId).string().not_null())
                    .col(
                        ColumnDef::new(UnitProgress::VideoCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UnitProgress::QuestionsCompleted)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UnitProgress::TotalQuestions)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(
                        ColumnDef::new(UnitProgress::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UnitProgress::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(UnitProgress::UserId)
                            .col(UnitProgress::ChapterId)
                            .col(UnitProgress::UnitId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UnitProgress::Table, UnitProgress::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UnitProgress::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UnitProgress {
    Table,
    UserId,
    ChapterId,
    UnitId,
    VideoCompleted,
    QuestionsCompleted,
    TotalQuestions,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
