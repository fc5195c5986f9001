//! Parking lot domain models and parameters.
//!
//! Provides domain models for parking lots with live capacity tracking,
//! including the parameter type used when creating a new lot.

use crate::model::parking::{CreateParkingDto, ParkingDto};

/// Parking lot with fixed capacity and live availability.
///
/// The `opened` flag always equals `count_available_places > 0`; it is derived
/// at creation and recomputed by the occupancy engine on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Parking {
    /// Database ID of the parking lot.
    pub id: i32,
    /// Street address, unique across all lots.
    pub address: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Whether the lot currently accepts arrivals.
    pub opened: bool,
    /// Total capacity, fixed at creation.
    pub count_places: i32,
    /// Number of currently free places.
    pub count_available_places: i32,
}

impl Parking {
    /// Converts the parking lot domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `ParkingDto` - The converted parking lot DTO
    pub fn into_dto(self) -> ParkingDto {
        ParkingDto {
            id: self.id,
            address: self.address,
            name: self.name,
            opened: self.opened,
            count_places: self.count_places,
            count_available_places: self.count_available_places,
        }
    }

    /// Converts an entity model to a parking lot domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Parking` - The converted parking lot domain model
    pub fn from_entity(entity: entity::parking::Model) -> Self {
        Self {
            id: entity.id,
            address: entity.address,
            name: entity.name,
            opened: entity.opened,
            count_places: entity.count_places,
            count_available_places: entity.count_available_places,
        }
    }
}

/// Parameters for creating a new parking lot.
///
/// The open/closed state is not a parameter; it is derived from the available
/// count when the lot is created.
#[derive(Debug, Clone)]
pub struct CreateParkingParam {
    /// Street address, unique across all lots.
    pub address: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Total capacity.
    pub count_places: i32,
    /// Initially free places, between 0 and `count_places`.
    pub count_available_places: i32,
}

impl CreateParkingParam {
    /// Converts a creation DTO into creation parameters at the controller boundary.
    ///
    /// # Arguments
    /// - `dto` - Parking lot creation request body
    ///
    /// # Returns
    /// - `CreateParkingParam` - Parameters for the parking service
    pub fn from_dto(dto: CreateParkingDto) -> Self {
        Self {
            address: dto.address,
            name: dto.name,
            count_places: dto.count_places,
            count_available_places: dto.count_available_places,
        }
    }
}
