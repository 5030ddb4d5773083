use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202608060001_create_metrics::Migration),
            Box::new(migrations::m202608060002_create_logs::Migration),
            Box::new(migrations::m202608060003_create_code_issues::Migration),
            Box::new(migrations::m202608060004_create_system_status::Migration),
        ]
    }
}
