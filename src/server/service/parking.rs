use sea_orm::DatabaseConnection;

use crate::server::{
    data::parking::ParkingRepository,
    error::AppError,
    model::parking::{CreateParkingParam, Parking},
};

pub struct ParkingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParkingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new parking lot.
    ///
    /// Validates that the initial availability fits the lot's capacity and that
    /// the address is not already in use. The stored open flag is derived from
    /// the initial availability; any flag in the request is ignored.
    ///
    /// # Arguments
    /// - `param` - Parking lot creation parameters
    ///
    /// # Returns
    /// - `Ok(Parking)` - The created parking lot
    /// - `Err(AppError::BadRequest)` - Counts out of range or address taken
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, param: CreateParkingParam) -> Result<Parking, AppError> {
        if param.count_places < 0 {
            return Err(AppError::BadRequest(format!(
                "Total places must not be negative, got {}",
                param.count_places
            )));
        }

        if param.count_available_places < 0 || param.count_available_places > param.count_places {
            return Err(AppError::BadRequest(format!(
                "Available places must be between 0 and {}, got {}",
                param.count_places, param.count_available_places
            )));
        }

        let repo = ParkingRepository::new(self.db);

        if repo.address_exists(&param.address).await? {
            return Err(AppError::BadRequest(format!(
                "A parking lot at {} already exists",
                param.address
            )));
        }

        let parking = repo.create(param).await?;

        Ok(parking)
    }

    /// Gets a specific parking lot by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Parking>, AppError> {
        let repo = ParkingRepository::new(self.db);

        let parking = repo.get_by_id(id).await?;

        Ok(parking)
    }

    /// Gets all parking lots ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Parking>, AppError> {
        let repo = ParkingRepository::new(self.db);

        let parkings = repo.get_all().await?;

        Ok(parkings)
    }
}
