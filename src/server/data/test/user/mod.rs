use super::dt;
use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::Role,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod apply_warning;
mod find_by_email;
