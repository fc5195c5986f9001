//! Carpark Test Utils
//!
//! Shared testing utilities for the carpark application's unit and integration
//! tests. Centers on a builder that assembles per-test in-memory SQLite
//! databases with exactly the tables a test needs, plus factories for seeding
//! them.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and setup
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Client;
//!
//! #[tokio::test]
//! async fn test_client_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Client)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
