//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running each occupancy transition atomically

pub mod client;
pub mod lot_lock;
pub mod occupancy;
pub mod parking;

#[cfg(test)]
mod test;
