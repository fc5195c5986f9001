use crate::server::{
    error::{occupancy::OccupancyError, AppError},
    model::client_parking::OccupancyParam,
    service::{lot_lock::LotLockService, occupancy::OccupancyService},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, client::ClientFactory, client_parking::ClientParkingFactory, parking::ParkingFactory,
    },
};

mod check_in;
