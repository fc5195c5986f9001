//! Client parking factory for creating test occupancy records.
//!
//! This module provides factory methods for creating client parking entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test occupancy records with customizable fields.
///
/// Provides a builder pattern for creating client parking entities with
/// default values that can be overridden as needed for specific test
/// scenarios. By default the record is an open stay: arrival time set to now
/// and no departure time.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::client_parking::ClientParkingFactory;
///
/// let record = ClientParkingFactory::new(&db, client.id, parking.id)
///     .time_in(None)
///     .build()
///     .await?;
/// ```
pub struct ClientParkingFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: i32,
    parking_id: i32,
    time_in: Option<chrono::DateTime<Utc>>,
    time_out: Option<chrono::DateTime<Utc>>,
}

impl<'a> ClientParkingFactory<'a> {
    /// Creates a new ClientParkingFactory with default values.
    ///
    /// Defaults:
    /// - time_in: `Some(now)`
    /// - time_out: `None` (open stay)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `client_id` - ID of the client occupying a place
    /// - `parking_id` - ID of the parking lot being occupied
    ///
    /// # Returns
    /// - `ClientParkingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, client_id: i32, parking_id: i32) -> Self {
        Self {
            db,
            client_id,
            parking_id,
            time_in: Some(Utc::now()),
            time_out: None,
        }
    }

    /// Sets the arrival time for the record.
    ///
    /// Pass `None` to create a record with no recorded arrival, which the
    /// checkout flow rejects as never having entered.
    ///
    /// # Arguments
    /// - `time_in` - Optional arrival timestamp
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn time_in(mut self, time_in: Option<chrono::DateTime<Utc>>) -> Self {
        self.time_in = time_in;
        self
    }

    /// Sets the departure time for the record.
    ///
    /// Pass `Some(..)` to create a closed record representing a completed stay.
    ///
    /// # Arguments
    /// - `time_out` - Optional departure timestamp
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn time_out(mut self, time_out: Option<chrono::DateTime<Utc>>) -> Self {
        self.time_out = time_out;
        self
    }

    /// Builds and inserts the occupancy record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::client_parking::Model)` - Created occupancy record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client_parking::Model, DbErr> {
        entity::client_parking::ActiveModel {
            id: ActiveValue::NotSet,
            client_id: ActiveValue::Set(self.client_id),
            parking_id: ActiveValue::Set(self.parking_id),
            time_in: ActiveValue::Set(self.time_in),
            time_out: ActiveValue::Set(self.time_out),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open occupancy record with default values.
///
/// Shorthand for `ClientParkingFactory::new(db, client_id, parking_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `client_id` - ID of the client
/// - `parking_id` - ID of the parking lot
///
/// # Returns
/// - `Ok(entity::client_parking::Model)` - Created occupancy record
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let record = create_client_parking(&db, client.id, parking.id).await?;
/// ```
pub async fn create_client_parking(
    db: &DatabaseConnection,
    client_id: i32,
    parking_id: i32,
) -> Result<entity::client_parking::Model, DbErr> {
    ClientParkingFactory::new(db, client_id, parking_id)
        .build()
        .await
}

/// Creates a closed occupancy record representing a completed stay.
///
/// The arrival time is set in the past and the departure time to now, so the
/// record never matches open-stay lookups.
///
/// # Arguments
/// - `db` - Database connection
/// - `client_id` - ID of the client
/// - `parking_id` - ID of the parking lot
///
/// # Returns
/// - `Ok(entity::client_parking::Model)` - Created closed occupancy record
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let record = create_closed_client_parking(&db, client.id, parking.id).await?;
/// ```
pub async fn create_closed_client_parking(
    db: &DatabaseConnection,
    client_id: i32,
    parking_id: i32,
) -> Result<entity::client_parking::Model, DbErr> {
    let hours = (next_id() % 24) as i64 + 1;
    ClientParkingFactory::new(db, client_id, parking_id)
        .time_in(Some(Utc::now() - chrono::Duration::hours(hours)))
        .time_out(Some(Utc::now()))
        .build()
        .await
}
