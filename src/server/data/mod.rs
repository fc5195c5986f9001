//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these
//! repositories. Repositories are generic over the connection, so the occupancy engine can
//! run them against an open transaction.

pub mod client;
pub mod client_parking;
pub mod parking;

#[cfg(test)]
mod test;
