use sea_orm::entity::prelude::*;

/// Volunteer event.
///
/// `date` carries local wall-clock semantics and is compared against the
/// scheduler's per-run local "now". `status` is one of `upcoming`,
/// `ongoing`, `completed` or `cancelled`; `checked` latches once the
/// attendance auditor has processed the event.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub organizer_email: String,
    pub date: DateTime,
    pub duration: i32,
    pub status: String,
    pub checked: bool,
    pub attendance_code: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_volunteer::Entity")]
    EventVolunteer,
}

impl Related<super::event_volunteer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventVolunteer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
