//! Client data repository for database operations.
//!
//! This module provides the `ClientRepository` for managing client records in the
//! database. It handles client registration and queries with proper conversion between
//! entity models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::client::{Client, CreateClientParam};

/// Repository providing database operations for client management.
///
/// This struct holds a reference to a database connection and provides methods for
/// creating, reading, and querying client records. It is generic over the connection
/// so the same methods run against the pooled connection or an open transaction.
pub struct ClientRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    /// Creates a new ClientRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `ClientRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a client from parameter model.
    ///
    /// # Arguments
    /// - `param` - Client creation parameters
    ///
    /// # Returns
    /// - `Ok(Client)` - The created client
    /// - `Err(DbErr)` - Database error during insert (including a violated
    ///   unique constraint on the car number)
    pub async fn create(&self, param: CreateClientParam) -> Result<Client, DbErr> {
        let entity = entity::client::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
            surname: ActiveValue::Set(param.surname),
            credit_card: ActiveValue::Set(param.credit_card),
            car_number: ActiveValue::Set(param.car_number),
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(entity))
    }

    /// Finds a client by ID.
    ///
    /// # Arguments
    /// - `client_id` - Database ID of the client
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - Client found
    /// - `Ok(None)` - No client with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, client_id: i32) -> Result<Option<Client>, DbErr> {
        let entity = entity::prelude::Client::find_by_id(client_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Client::from_entity))
    }

    /// Gets all registered clients ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Client>)` - All clients (empty if none registered)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Client>, DbErr> {
        let entities = entity::prelude::Client::find()
            .order_by_asc(entity::client::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Client::from_entity).collect())
    }

    /// Checks if a car number is already registered.
    ///
    /// Used to reject duplicate registrations with a structured error before the
    /// unique constraint fires.
    ///
    /// # Arguments
    /// - `car_number` - Car registration number to check
    ///
    /// # Returns
    /// - `Ok(true)` - A client with this car number exists
    /// - `Ok(false)` - Car number is unused
    /// - `Err(DbErr)` - Database error during count query
    pub async fn car_number_exists(&self, car_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Client::find()
            .filter(entity::client::Column::CarNumber.eq(car_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
