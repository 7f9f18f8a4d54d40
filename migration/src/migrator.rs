use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202607210001_create_users::Migration),
            Box::new(migrations::m202607210002_create_students::Migration),
            Box::new(migrations::m202607210003_create_leave_requests::Migration),
        ]
    }
}
