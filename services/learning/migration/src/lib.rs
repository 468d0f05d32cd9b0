use sea_orm_migration::prelude::*;

mod m20260401_000001_create_dioceses;
mod m20260401_000002_create_regions;
mod m20260401_000003_create_groups;
mod m20260401_000004_create_users;
mod m20260401_000005_create_managers;
mod m20260401_000006_create_unit_progress;
mod m20260401_000007_create_question_progress;
mod m20260401_000008_add_org_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_dioceses::Migration),
            Box::new(m20260401_000002_create_regions::Migration),
            Box::new(m20260401_000003_create_groups::Migration),
            Box::new(m20260401_000004_create_users::Migration),
            Box::new(m20260401_000005_create_managers::Migration),
            Box::new(m20260401_000006_create_unit_progress::Migration),
            Box::new(m20260401_000007_create_question_progress::Migration),
            Box::new(m20260401_000008_add_org_indexes::Migration),
        ]
    }
}
