use super::dt;
use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{NewNotificationParam, NotificationKind},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
