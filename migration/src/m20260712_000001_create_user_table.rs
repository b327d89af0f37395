use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Email).primary_key())
                    .col(string(User::Name))
                    .col(string(User::Role))
                    .col(integer(User::Warnings).default(0))
                    .col(timestamp_null(User::BanUntil))
                    .col(boolean(User::IsPermanentlyBanned).default(false))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Email,
    Name,
    Role,
    Warnings,
    BanUntil,
    IsPermanentlyBanned,
    CreatedAt,
}
