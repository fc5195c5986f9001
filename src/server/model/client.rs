//! Client domain models and parameters.
//!
//! Provides domain models for registered clients of the parking service,
//! including the parameter type used when registering a new client.

use crate::model::client::{ClientDto, CreateClientDto};

/// Client with identity, payment card, and vehicle registration.
///
/// The payment card token is optional; a client without one cannot check in
/// to a parking lot.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    /// Database ID of the client.
    pub id: i32,
    /// First name of the client.
    pub name: String,
    /// Last name of the client.
    pub surname: String,
    /// Optional payment card token.
    pub credit_card: Option<String>,
    /// Car registration number, unique across all clients.
    pub car_number: String,
}

impl Client {
    /// Converts the client domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `ClientDto` - The converted client DTO
    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            credit_card: self.credit_card,
            car_number: self.car_number,
        }
    }

    /// Converts an entity model to a client domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Client` - The converted client domain model
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            credit_card: entity.credit_card,
            car_number: entity.car_number,
        }
    }

    /// Whether the client has a usable payment card linked.
    ///
    /// An absent or empty card token both count as missing; check-in requires
    /// this to return true.
    ///
    /// # Returns
    /// - `bool` - True when a non-empty card token is linked
    pub fn has_payment_card(&self) -> bool {
        self.credit_card
            .as_deref()
            .map(|card| !card.is_empty())
            .unwrap_or(false)
    }
}

/// Parameters for registering a new client.
#[derive(Debug, Clone)]
pub struct CreateClientParam {
    /// First name of the client.
    pub name: String,
    /// Last name of the client.
    pub surname: String,
    /// Optional payment card token.
    pub credit_card: Option<String>,
    /// Car registration number, unique across all clients.
    pub car_number: String,
}

impl CreateClientParam {
    /// Converts a creation DTO into creation parameters at the controller boundary.
    ///
    /// # Arguments
    /// - `dto` - Client creation request body
    ///
    /// # Returns
    /// - `CreateClientParam` - Parameters for the client service
    pub fn from_dto(dto: CreateClientDto) -> Self {
        Self {
            name: dto.name,
            surname: dto.surname,
            credit_card: dto.credit_card,
            car_number: dto.car_number,
        }
    }
}
