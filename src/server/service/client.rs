use sea_orm::DatabaseConnection;

use crate::server::{
    data::client::ClientRepository,
    error::AppError,
    model::client::{Client, CreateClientParam},
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new client.
    ///
    /// Rejects a car number that is already registered before attempting the
    /// insert; the schema's unique constraint remains the backstop.
    ///
    /// # Arguments
    /// - `param` - Client registration parameters
    ///
    /// # Returns
    /// - `Ok(Client)` - The registered client
    /// - `Err(AppError::BadRequest)` - Car number already registered
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, param: CreateClientParam) -> Result<Client, AppError> {
        let repo = ClientRepository::new(self.db);

        if repo.car_number_exists(&param.car_number).await? {
            return Err(AppError::BadRequest(format!(
                "Car number {} is already registered",
                param.car_number
            )));
        }

        let client = repo.create(param).await?;

        Ok(client)
    }

    /// Gets a specific client by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Client>, AppError> {
        let repo = ClientRepository::new(self.db);

        let client = repo.get_by_id(id).await?;

        Ok(client)
    }

    /// Gets all registered clients ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Client>, AppError> {
        let repo = ClientRepository::new(self.db);

        let clients = repo.get_all().await?;

        Ok(clients)
    }
}
