//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a client currently checked in to a parking lot.
///
/// This is a convenience method that creates:
/// 1. Client (with a payment card linked)
/// 2. Parking lot (20 places, one taken by the client)
/// 3. Open occupancy record linking the two
///
/// The parking lot's availability reflects the occupant, so a subsequent
/// checkout restores it to full capacity. Use the individual factories if you
/// need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((client, parking, record))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_checked_in_client(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::client::Model,
        entity::parking::Model,
        entity::client_parking::Model,
    ),
    DbErr,
> {
    let client = crate::factory::client::create_client(db).await?;
    let parking = crate::factory::parking::ParkingFactory::new(db)
        .count_places(20)
        .count_available_places(19)
        .build()
        .await?;
    let record =
        crate::factory::client_parking::create_client_parking(db, client.id, parking.id).await?;

    Ok((client, parking, record))
}
