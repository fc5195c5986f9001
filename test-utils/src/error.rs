use thiserror::Error;

/// Errors that can occur during test environment setup.
///
/// Wraps failures from database connection and schema creation so test code can
/// propagate them with `?` instead of panicking during setup.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection or schema setup error from SeaORM.
    ///
    /// Raised when connecting to the in-memory SQLite database fails or a
    /// CREATE TABLE statement cannot be executed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
