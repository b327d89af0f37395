use sea_orm::entity::prelude::*;

/// Application user keyed by email.
///
/// `warnings`, `ban_until` and `is_permanently_banned` are mutated only by
/// the attendance auditor; `role` is one of `volunteer`,
/// `pending-organizer`, `organizer` or `admin`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    pub name: String,
    pub role: String,
    pub warnings: i32,
    pub ban_until: Option<DateTime>,
    pub is_permanently_banned: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
