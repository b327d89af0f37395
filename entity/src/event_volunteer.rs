use sea_orm::entity::prelude::*;

/// Registration of a volunteer for an event.
///
/// `email` intentionally has no foreign key to `user`: a registration may
/// outlive its user record, and the attendance auditor skips such rows.
/// `is_present` is a tri-state flag: `None` = never marked, `Some(false)` =
/// marked absent, `Some(true)` = present.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_volunteer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub email: String,
    pub name: String,
    pub registered_at: DateTime,
    pub is_present: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
