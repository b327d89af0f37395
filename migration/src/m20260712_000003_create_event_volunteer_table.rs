use sea_orm_migration::{prelude::*, schema::*};

use super::m20260712_000002_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on Email: a registration may outlive its user
        // record, and the attendance auditor skips orphaned rows.
        manager
            .create_table(
                Table::create()
                    .table(EventVolunteer::Table)
                    .if_not_exists()
                    .col(pk_auto(EventVolunteer::Id))
                    .col(integer(EventVolunteer::EventId))
                    .col(string(EventVolunteer::Email))
                    .col(string(EventVolunteer::Name))
                    .col(timestamp(EventVolunteer::RegisteredAt))
                    .col(boolean_null(EventVolunteer::IsPresent))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_volunteer_event_id")
                            .from(EventVolunteer::Table, EventVolunteer::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_event_volunteer_unique")
                            .col(EventVolunteer::EventId)
                            .col(EventVolunteer::Email),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventVolunteer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventVolunteer {
    Table,
    Id,
    EventId,
    Email,
    Name,
    RegisteredAt,
    IsPresent,
}
