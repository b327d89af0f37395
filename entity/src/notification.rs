use sea_orm::entity::prelude::*;

/// Append-only user-facing notification.
///
/// `kind` is one of `warning` (attendance penalties), `success` or `sorry`
/// (registration traffic to organizers). `read` and `toast_shown` are
/// mutated by read/ack surfaces outside this crate.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub message: String,
    pub reason: String,
    pub kind: String,
    pub read: bool,
    pub toast_shown: bool,
    pub timestamp: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
