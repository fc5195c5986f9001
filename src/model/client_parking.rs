use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::parking::ParkingDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OccupancyDto {
    pub id: i32,
    pub client_id: i32,
    pub parking_id: i32,
    pub time_in: Option<DateTime<Utc>>,
    pub time_out: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OccupancyRequestDto {
    pub client_id: i32,
    pub parking_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArrivalClientDto {
    pub parking: ParkingDto,
    pub card: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArrivalResponseDto {
    pub arrival: OccupancyDto,
    pub client: ArrivalClientDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DepartureInfoDto {
    pub departure: OccupancyDto,
    pub payment: bool,
    pub parking: ParkingDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DepartureResponseDto {
    pub departure: DepartureInfoDto,
}
