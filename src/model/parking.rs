use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ParkingDto {
    pub id: i32,
    pub address: String,
    pub name: Option<String>,
    pub opened: bool,
    pub count_places: i32,
    pub count_available_places: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateParkingDto {
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    pub count_places: i32,
    pub count_available_places: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ParkingListDto {
    pub parkings: Vec<ParkingDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ParkingDetailDto {
    pub parking: ParkingDto,
}
