use crate::{
    data::pending_review::PendingReviewRepository,
    model::{
        pending_review::{CreatePendingReviewParam, RoleChangePayload},
        role::RoleColor,
    },
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{create_pending_review, pending_review::PendingReviewFactory},
};

mod create;
mod delete;
mod get_all;
mod take;
