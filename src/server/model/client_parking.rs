//! Occupancy domain models and parameters.
//!
//! Provides domain models for client stays at parking lots and the result
//! types returned by the occupancy engine for arrivals and departures.

use chrono::{DateTime, Utc};

use crate::{
    model::client_parking::{
        ArrivalClientDto, ArrivalResponseDto, DepartureInfoDto, DepartureResponseDto, OccupancyDto,
        OccupancyRequestDto,
    },
    server::model::parking::Parking,
};

/// One client's stay at one parking lot.
///
/// A stay is open while `time_out` is unset. A client has at most one open
/// stay per lot; closed rows accumulate as history.
#[derive(Debug, Clone, PartialEq)]
pub struct Occupancy {
    /// Database ID of the occupancy record.
    pub id: i32,
    /// ID of the client occupying a place.
    pub client_id: i32,
    /// ID of the occupied parking lot.
    pub parking_id: i32,
    /// Arrival time, set when the stay is created through check-in.
    pub time_in: Option<DateTime<Utc>>,
    /// Departure time, set once on check-out.
    pub time_out: Option<DateTime<Utc>>,
}

impl Occupancy {
    /// Converts the occupancy domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `OccupancyDto` - The converted occupancy DTO
    pub fn into_dto(self) -> OccupancyDto {
        OccupancyDto {
            id: self.id,
            client_id: self.client_id,
            parking_id: self.parking_id,
            time_in: self.time_in,
            time_out: self.time_out,
        }
    }

    /// Converts an entity model to an occupancy domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Occupancy` - The converted occupancy domain model
    pub fn from_entity(entity: entity::client_parking::Model) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            parking_id: entity.parking_id,
            time_in: entity.time_in,
            time_out: entity.time_out,
        }
    }
}

/// Parameters identifying a (client, lot) pair for a transition.
#[derive(Debug, Clone, Copy)]
pub struct OccupancyParam {
    /// ID of the client.
    pub client_id: i32,
    /// ID of the parking lot.
    pub parking_id: i32,
}

impl OccupancyParam {
    /// Converts a transition request DTO into engine parameters at the controller boundary.
    ///
    /// # Arguments
    /// - `dto` - Check-in or check-out request body
    ///
    /// # Returns
    /// - `OccupancyParam` - Parameters for the occupancy engine
    pub fn from_dto(dto: OccupancyRequestDto) -> Self {
        Self {
            client_id: dto.client_id,
            parking_id: dto.parking_id,
        }
    }
}

/// Result of a successful check-in.
///
/// Carries the created stay, the lot snapshot after the capacity decrement,
/// and the client's card token echoed back in the response.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival {
    /// The newly created open stay.
    pub occupancy: Occupancy,
    /// Lot state after the arrival was applied.
    pub parking: Parking,
    /// Payment card token of the arriving client.
    pub card: String,
}

impl Arrival {
    /// Converts the arrival result to the nested response DTO.
    ///
    /// # Returns
    /// - `ArrivalResponseDto` - Response body with `arrival` and `client` envelopes
    pub fn into_dto(self) -> ArrivalResponseDto {
        ArrivalResponseDto {
            arrival: self.occupancy.into_dto(),
            client: ArrivalClientDto {
                parking: self.parking.into_dto(),
                card: self.card,
            },
        }
    }
}

/// Result of a successful check-out.
///
/// Carries the closed stay, the payment confirmation stub, and the lot
/// snapshot after the capacity increment.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    /// The stay after its departure time was set.
    pub occupancy: Occupancy,
    /// Payment confirmation stub; always true, no processing is performed.
    pub payment: bool,
    /// Lot state after the departure was applied.
    pub parking: Parking,
}

impl Departure {
    /// Converts the departure result to the nested response DTO.
    ///
    /// # Returns
    /// - `DepartureResponseDto` - Response body with the `departure` envelope
    pub fn into_dto(self) -> DepartureResponseDto {
        DepartureResponseDto {
            departure: DepartureInfoDto {
                departure: self.occupancy.into_dto(),
                payment: self.payment,
                parking: self.parking.into_dto(),
            },
        }
    }
}
