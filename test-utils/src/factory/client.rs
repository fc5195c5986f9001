//! Client factory for creating test client entities.
//!
//! This module provides factory methods for creating client entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
///
/// Provides a builder pattern for creating client entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::client::ClientFactory;
///
/// let client = ClientFactory::new(&db)
///     .name("Alice")
///     .credit_card(None)
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    surname: String,
    credit_card: Option<String>,
    car_number: String,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Client {id}"` where id is auto-incremented
    /// - surname: `"Surname {id}"`
    /// - credit_card: `Some("4111-{id}")`
    /// - car_number: `"A{id}AA"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ClientFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Client {}", id),
            surname: format!("Surname {}", id),
            credit_card: Some(format!("4111-{:04}", id)),
            car_number: format!("A{:03}AA", id),
        }
    }

    /// Sets the first name for the client.
    ///
    /// # Arguments
    /// - `name` - First name of the client
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the surname for the client.
    ///
    /// # Arguments
    /// - `surname` - Last name of the client
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    /// Sets the payment card token for the client.
    ///
    /// Pass `None` to create a client without a linked card, which makes the
    /// client ineligible for check-in.
    ///
    /// # Arguments
    /// - `credit_card` - Optional payment card token
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn credit_card(mut self, credit_card: Option<String>) -> Self {
        self.credit_card = credit_card;
        self
    }

    /// Sets the car registration number for the client.
    ///
    /// # Arguments
    /// - `car_number` - Unique car registration number
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn car_number(mut self, car_number: impl Into<String>) -> Self {
        self.car_number = car_number.into();
        self
    }

    /// Builds and inserts the client entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            surname: ActiveValue::Set(self.surname),
            credit_card: ActiveValue::Set(self.credit_card),
            car_number: ActiveValue::Set(self.car_number),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
///
/// Shorthand for `ClientFactory::new(db).build().await`. The created client has
/// a payment card linked and can check in.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::client::Model)` - Created client entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let client = create_client(&db).await?;
/// ```
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}

/// Creates a client without a payment card.
///
/// Shorthand for `ClientFactory::new(db).credit_card(None).build().await`.
/// Useful for testing check-in rejection of clients with no linked card.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::client::Model)` - Created client entity with no card
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let client = create_client_without_card(&db).await?;
/// ```
pub async fn create_client_without_card(
    db: &DatabaseConnection,
) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).credit_card(None).build().await
}
