//! Parking factory for creating test parking lot entities.
//!
//! This module provides factory methods for creating parking lot entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test parking lots with customizable fields.
///
/// Provides a builder pattern for creating parking lot entities with default
/// values that can be overridden as needed for specific test scenarios. The
/// `opened` flag is always derived from availability at build time rather than
/// set directly, matching how the application creates lots.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::parking::ParkingFactory;
///
/// let parking = ParkingFactory::new(&db)
///     .count_places(20)
///     .count_available_places(8)
///     .build()
///     .await?;
/// ```
pub struct ParkingFactory<'a> {
    db: &'a DatabaseConnection,
    address: String,
    name: Option<String>,
    count_places: i32,
    count_available_places: Option<i32>,
}

impl<'a> ParkingFactory<'a> {
    /// Creates a new ParkingFactory with default values.
    ///
    /// Defaults:
    /// - address: `"{id} Main Street"` where id is auto-incremented
    /// - name: `Some("Parking {id}")`
    /// - count_places: `20`
    /// - count_available_places: equal to `count_places` unless overridden
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ParkingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            address: format!("{} Main Street", id),
            name: Some(format!("Parking {}", id)),
            count_places: 20,
            count_available_places: None,
        }
    }

    /// Sets the street address for the parking lot.
    ///
    /// # Arguments
    /// - `address` - Unique street address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the display name for the parking lot.
    ///
    /// # Arguments
    /// - `name` - Optional display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the total capacity for the parking lot.
    ///
    /// # Arguments
    /// - `count_places` - Total number of places
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn count_places(mut self, count_places: i32) -> Self {
        self.count_places = count_places;
        self
    }

    /// Sets the number of currently available places.
    ///
    /// When not set, availability defaults to the total capacity. Setting this
    /// to `0` produces a closed lot, since `opened` is derived at build time.
    ///
    /// # Arguments
    /// - `count_available_places` - Number of free places
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn count_available_places(mut self, count_available_places: i32) -> Self {
        self.count_available_places = Some(count_available_places);
        self
    }

    /// Builds and inserts the parking lot entity into the database.
    ///
    /// The `opened` flag is derived from the final availability: a lot with at
    /// least one free place is open, a lot with none is closed.
    ///
    /// # Returns
    /// - `Ok(entity::parking::Model)` - Created parking lot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::parking::Model, DbErr> {
        let count_available_places = self.count_available_places.unwrap_or(self.count_places);

        entity::parking::ActiveModel {
            id: ActiveValue::NotSet,
            address: ActiveValue::Set(self.address),
            name: ActiveValue::Set(self.name),
            opened: ActiveValue::Set(count_available_places > 0),
            count_places: ActiveValue::Set(self.count_places),
            count_available_places: ActiveValue::Set(count_available_places),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a parking lot with default values.
///
/// Shorthand for `ParkingFactory::new(db).build().await`. The created lot is
/// open with all 20 places available.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::parking::Model)` - Created parking lot entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let parking = create_parking(&db).await?;
/// ```
pub async fn create_parking(db: &DatabaseConnection) -> Result<entity::parking::Model, DbErr> {
    ParkingFactory::new(db).build().await
}

/// Creates a closed parking lot with no available places.
///
/// Shorthand for `ParkingFactory::new(db).count_available_places(0).build().await`.
/// Useful for testing check-in rejection when a lot is full.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::parking::Model)` - Created parking lot entity with `opened` false
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let parking = create_full_parking(&db).await?;
/// ```
pub async fn create_full_parking(db: &DatabaseConnection) -> Result<entity::parking::Model, DbErr> {
    ParkingFactory::new(db).count_available_places(0).build().await
}
