use super::dt;
use crate::server::data::volunteer::VolunteerRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, volunteer::VolunteerFactory},
};

mod get_by_event;
mod register;
mod remove;
mod set_presence;
