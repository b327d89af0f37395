use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(string(Notification::Email))
                    .col(string(Notification::Message))
                    .col(text(Notification::Reason))
                    .col(string(Notification::Kind))
                    .col(boolean(Notification::Read).default(false))
                    .col(boolean(Notification::ToastShown).default(false))
                    .col(timestamp(Notification::Timestamp))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    Email,
    Message,
    Reason,
    Kind,
    Read,
    ToastShown,
    Timestamp,
}
