//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let client = factory::client::create_client(&db).await?;
//!     let parking = factory::parking::create_parking(&db).await?;
//!
//!     // Create a client mid-stay with all dependencies
//!     let (client, parking, record) =
//!         factory::helpers::create_checked_in_client(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let client = factory::client::ClientFactory::new(&db)
//!     .name("Alice")
//!     .credit_card(None)
//!     .build()
//!     .await?;
//!
//! // Using convenience functions for common shapes
//! let full = factory::create_full_parking(&db).await?;
//! let record = factory::create_client_parking(&db, client.id, full.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `client` - Create client entities
//! - `parking` - Create parking lot entities
//! - `client_parking` - Create occupancy record entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod client;
pub mod client_parking;
pub mod helpers;
pub mod parking;

// Re-export commonly used factory functions for concise usage
pub use client::{create_client, create_client_without_card};
pub use client_parking::{create_client_parking, create_closed_client_parking};
pub use parking::{create_full_parking, create_parking};
