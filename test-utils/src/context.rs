use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context owning the database connection for one test.
///
/// Wraps an in-memory SQLite database so every test runs against its own
/// isolated schema. The connection is opened lazily on first access and lives
/// as long as the context does.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance.
    ///
    /// `None` until `database()` is first called, so contexts that never touch
    /// the database never open a connection.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a context with no connection yet.
    ///
    /// The connection is opened on the first `database()` call.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the database connection, opening it on first use.
    ///
    /// Later calls return the connection opened earlier, so all queries within
    /// one test share the same in-memory database.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Runs the given CREATE TABLE statements against the test database.
    ///
    /// Statements execute in order, so callers must list referenced tables
    /// before the tables whose foreign keys point at them. Usually invoked
    /// through `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - A statement failed to execute
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
