use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::server::{config::Config, error::AppError};

/// Connects to the SQLite database and ensures the schema exists.
///
/// Establishes a connection pool to the SQLite database using the connection string from
/// configuration, then creates any missing tables from the entity models. This function
/// must complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with schema in place
/// - `Err(AppError)` - Failed to connect to database or create tables
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    create_tables(&db).await?;

    Ok(db)
}

/// Creates missing tables from the entity models.
///
/// Builds a `CREATE TABLE IF NOT EXISTS` statement per entity and executes them
/// in dependency order, so existing data is left untouched on restart.
///
/// # Arguments
/// - `db` - Connected database
///
/// # Returns
/// - `Ok(())` - All tables present
/// - `Err(AppError::DbErr)` - Failed to execute a create statement
async fn create_tables(db: &DatabaseConnection) -> Result<(), AppError> {
    let schema = Schema::new(db.get_database_backend());

    let stmts = vec![
        schema.create_table_from_entity(entity::prelude::Client),
        schema.create_table_from_entity(entity::prelude::Parking),
        schema.create_table_from_entity(entity::prelude::ClientParking),
    ];

    for mut stmt in stmts {
        stmt.if_not_exists();
        db.execute(&stmt).await?;
    }

    Ok(())
}
