//! Occupancy data repository for database operations.
//!
//! This module provides the `ClientParkingRepository` for managing the stay records
//! linking clients to parking lots. It handles creation of open stays, lookup of the
//! open stay for a pair, and closing a stay on departure.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::client_parking::Occupancy;

/// Repository providing database operations for occupancy records.
///
/// This struct holds a reference to a database connection and provides methods for
/// creating, finding, and closing stays. It is generic over the connection so the
/// same methods run against the pooled connection or an open transaction.
pub struct ClientParkingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientParkingRepository<'a, C> {
    /// Creates a new ClientParkingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `ClientParkingRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an open stay for a (client, lot) pair.
    ///
    /// The stay starts open: the arrival time is recorded and the departure
    /// time is left unset.
    ///
    /// # Arguments
    /// - `client_id` - Database ID of the arriving client
    /// - `parking_id` - Database ID of the targeted parking lot
    /// - `time_in` - Arrival timestamp
    ///
    /// # Returns
    /// - `Ok(Occupancy)` - The created open stay
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        client_id: i32,
        parking_id: i32,
        time_in: DateTime<Utc>,
    ) -> Result<Occupancy, DbErr> {
        let entity = entity::client_parking::ActiveModel {
            id: ActiveValue::NotSet,
            client_id: ActiveValue::Set(client_id),
            parking_id: ActiveValue::Set(parking_id),
            time_in: ActiveValue::Set(Some(time_in)),
            time_out: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(Occupancy::from_entity(entity))
    }

    /// Finds the open stay for a (client, lot) pair.
    ///
    /// A stay is open while its departure time is unset. The engine keeps at
    /// most one open stay per pair; if seeded data ever holds several, the most
    /// recently created one is returned.
    ///
    /// # Arguments
    /// - `client_id` - Database ID of the client
    /// - `parking_id` - Database ID of the parking lot
    ///
    /// # Returns
    /// - `Ok(Some(Occupancy))` - The pair's open stay
    /// - `Ok(None)` - No open stay; the pair has only closed history or none at all
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_open(
        &self,
        client_id: i32,
        parking_id: i32,
    ) -> Result<Option<Occupancy>, DbErr> {
        let entity = entity::prelude::ClientParking::find()
            .filter(entity::client_parking::Column::ClientId.eq(client_id))
            .filter(entity::client_parking::Column::ParkingId.eq(parking_id))
            .filter(entity::client_parking::Column::TimeOut.is_null())
            .order_by_desc(entity::client_parking::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Occupancy::from_entity))
    }

    /// Closes a stay by setting its departure time.
    ///
    /// # Arguments
    /// - `id` - Database ID of the stay to close
    /// - `time_out` - Departure timestamp
    ///
    /// # Returns
    /// - `Ok(Occupancy)` - The closed stay
    /// - `Err(DbErr::RecordNotFound)` - No stay exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn close(&self, id: i32, time_out: DateTime<Utc>) -> Result<Occupancy, DbErr> {
        let record = entity::prelude::ClientParking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Occupancy record with id {} not found",
                id
            )))?;

        let mut active_model: entity::client_parking::ActiveModel = record.into();
        active_model.time_out = ActiveValue::Set(Some(time_out));

        let entity = active_model.update(self.db).await?;

        Ok(Occupancy::from_entity(entity))
    }
}
