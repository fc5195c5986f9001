use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for assembling the database schema a test needs.
///
/// Collects entity tables through a fluent interface, then materializes an
/// in-memory SQLite database holding exactly those tables when `build()` is
/// called.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Client, Parking};
///
/// let test = TestBuilder::new()
///     .with_table(Client)
///     .with_table(Parking)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements queued for execution during `build()`.
    ///
    /// Each statement is derived from an entity definition via SeaORM's schema
    /// builder and runs in the order it was added.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables queued.
    ///
    /// Chain `with_table()` calls to declare the schema, then call `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues one entity's table for creation.
    ///
    /// The CREATE TABLE statement is generated with SQLite backend syntax and
    /// executed when `build()` runs. Add tables in dependency order: a table
    /// with a foreign key goes after the table it references.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for parking operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Client
    /// - Parking
    /// - ClientParking
    ///
    /// Use this when testing check-in and check-out functionality, which touches all
    /// three tables. For tests that only need a subset, add tables individually with
    /// `with_table()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_parking_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_parking_tables(self) -> Self {
        self.with_table(Client)
            .with_table(Parking)
            .with_table(ClientParking)
    }

    /// Materializes the test context with every queued table created.
    ///
    /// Opens the in-memory SQLite connection and runs the queued CREATE TABLE
    /// statements in insertion order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
