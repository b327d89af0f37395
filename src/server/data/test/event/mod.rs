use super::dt;
use crate::server::{
    data::event::EventRepository,
    model::event::{CreateEventParam, EventStatus},
};
use chrono::Duration;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory::event::EventFactory};

mod complete;
mod create;
mod get_unaudited_completed;
mod mark_checked;
mod start_due_events;
