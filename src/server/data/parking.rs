//! Parking lot data repository for database operations.
//!
//! This module provides the `ParkingRepository` for managing parking lot records in
//! the database. It handles lot creation, queries, and the capacity updates applied
//! by the occupancy engine, with proper conversion between entity models and domain
//! models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::parking::{CreateParkingParam, Parking};

/// Repository providing database operations for parking lot management.
///
/// This struct holds a reference to a database connection and provides methods for
/// creating, reading, and updating parking lot records. It is generic over the
/// connection so the same methods run against the pooled connection or an open
/// transaction.
pub struct ParkingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParkingRepository<'a, C> {
    /// Creates a new ParkingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `ParkingRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a parking lot from parameter model.
    ///
    /// The stored `opened` flag is derived from the initial availability; the
    /// parameters carry no open/closed input.
    ///
    /// # Arguments
    /// - `param` - Parking lot creation parameters
    ///
    /// # Returns
    /// - `Ok(Parking)` - The created parking lot
    /// - `Err(DbErr)` - Database error during insert (including a violated
    ///   unique constraint on the address)
    pub async fn create(&self, param: CreateParkingParam) -> Result<Parking, DbErr> {
        let entity = entity::parking::ActiveModel {
            id: ActiveValue::NotSet,
            address: ActiveValue::Set(param.address),
            name: ActiveValue::Set(param.name),
            opened: ActiveValue::Set(param.count_available_places > 0),
            count_places: ActiveValue::Set(param.count_places),
            count_available_places: ActiveValue::Set(param.count_available_places),
        }
        .insert(self.db)
        .await?;

        Ok(Parking::from_entity(entity))
    }

    /// Finds a parking lot by ID.
    ///
    /// # Arguments
    /// - `parking_id` - Database ID of the parking lot
    ///
    /// # Returns
    /// - `Ok(Some(Parking))` - Parking lot found
    /// - `Ok(None)` - No parking lot with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, parking_id: i32) -> Result<Option<Parking>, DbErr> {
        let entity = entity::prelude::Parking::find_by_id(parking_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Parking::from_entity))
    }

    /// Gets all parking lots ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Parking>)` - All parking lots (empty if none created)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Parking>, DbErr> {
        let entities = entity::prelude::Parking::find()
            .order_by_asc(entity::parking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Parking::from_entity).collect())
    }

    /// Checks if an address is already in use by another lot.
    ///
    /// # Arguments
    /// - `address` - Street address to check
    ///
    /// # Returns
    /// - `Ok(true)` - A parking lot with this address exists
    /// - `Ok(false)` - Address is unused
    /// - `Err(DbErr)` - Database error during count query
    pub async fn address_exists(&self, address: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Parking::find()
            .filter(entity::parking::Column::Address.eq(address))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Writes a lot's availability count and open flag.
    ///
    /// This is the single write path for the capacity columns after creation.
    /// The occupancy engine computes the absolute new count and the derived
    /// flag; this method only persists them.
    ///
    /// # Arguments
    /// - `parking_id` - Database ID of the parking lot
    /// - `count_available_places` - New number of free places
    /// - `opened` - New open flag, equal to `count_available_places > 0`
    ///
    /// # Returns
    /// - `Ok(Parking)` - The updated parking lot
    /// - `Err(DbErr::RecordNotFound)` - No parking lot exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn update_capacity(
        &self,
        parking_id: i32,
        count_available_places: i32,
        opened: bool,
    ) -> Result<Parking, DbErr> {
        let parking = entity::prelude::Parking::find_by_id(parking_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Parking with id {} not found",
                parking_id
            )))?;

        let mut active_model: entity::parking::ActiveModel = parking.into();
        active_model.count_available_places = ActiveValue::Set(count_available_places);
        active_model.opened = ActiveValue::Set(opened);

        let entity = active_model.update(self.db).await?;

        Ok(Parking::from_entity(entity))
    }
}
