use crate::server::{
    error::AppError,
    model::client::CreateClientParam,
    service::client::ClientService,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
