use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuestionProgress::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(QuestionProgress::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(QuestionProgress::QuestionId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuestionProgress::ChapterId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QuestionProgress::UnitId).string().not_null())
                    .col(
                        ColumnDef::new(QuestionProgress::Attempts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(QuestionProgress::Incorrect)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(QuestionProgress::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(QuestionProgress::UserId)
                            .col(QuestionProgress::QuestionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuestionProgress::Table, QuestionProgress::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuestionProgress::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum QuestionProgress {
    Table,
    UserId,
    QuestionId,
    ChapterId,
    UnitId,
    Attempts,
    Incorrect,
    CompletedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
