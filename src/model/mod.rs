//! Wire DTOs shared across the API surface.
//!
//! These types define the JSON request and response bodies of the HTTP API.
//! Conversion from domain models happens at the controller boundary via
//! `into_dto` methods on the server models.

pub mod api;
pub mod client;
pub mod client_parking;
pub mod parking;
