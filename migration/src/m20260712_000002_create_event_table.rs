use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(string(Event::OrganizerEmail))
                    .col(timestamp(Event::Date))
                    .col(integer(Event::Duration))
                    .col(string(Event::Status).default("upcoming"))
                    .col(boolean(Event::Checked).default(false))
                    .col(string_null(Event::AttendanceCode))
                    .col(
                        timestamp(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    OrganizerEmail,
    Date,
    Duration,
    Status,
    Checked,
    AttendanceCode,
    CreatedAt,
}
