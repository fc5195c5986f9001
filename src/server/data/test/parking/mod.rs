use crate::server::{data::parking::ParkingRepository, model::parking::CreateParkingParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod address_exists;
mod create;
mod get_all;
