pub use sea_orm_migration::prelude::*;

mod m20260712_000001_create_user_table;
mod m20260712_000002_create_event_table;
mod m20260712_000003_create_event_volunteer_table;
mod m20260712_000004_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_create_user_table::Migration),
            Box::new(m20260712_000002_create_event_table::Migration),
            Box::new(m20260712_000003_create_event_volunteer_table::Migration),
            Box::new(m20260712_000004_create_notification_table::Migration),
        ]
    }
}
