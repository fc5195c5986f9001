use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        client::ClientRepository, client_parking::ClientParkingRepository,
        parking::ParkingRepository,
    },
    error::{occupancy::OccupancyError, AppError},
    model::client_parking::{Arrival, Departure, OccupancyParam},
    service::lot_lock::LotLockService,
};

/// Engine applying arrival and departure transitions to parking lots.
///
/// Each transition runs under the target lot's lock and inside a single
/// database transaction, so the validation reads and the capacity writes of
/// one transition never interleave with another against the same lot. Any
/// rejection returns before the commit and leaves the database untouched.
pub struct OccupancyService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a LotLockService,
}

impl<'a> OccupancyService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a LotLockService) -> Self {
        Self { db, locks }
    }

    /// Checks a client in to a parking lot.
    ///
    /// Validation order is part of the API contract: the lot must exist and be
    /// open, then the client must exist with a non-empty payment card, then
    /// the client must not already be parked at this lot. On success an open
    /// stay is created and one available place is consumed; a lot whose count
    /// reaches zero closes.
    ///
    /// # Arguments
    /// - `param` - IDs of the arriving client and the targeted lot
    ///
    /// # Returns
    /// - `Ok(Arrival)` - Created stay, updated lot snapshot, and the card token
    /// - `Err(AppError::OccupancyErr)` - Rejected transition, no state change
    /// - `Err(AppError)` - Database error
    pub async fn check_in(&self, param: OccupancyParam) -> Result<Arrival, AppError> {
        let _guard = self.locks.acquire(param.parking_id).await;

        let txn = self.db.begin().await?;

        // A missing lot and a closed lot are indistinguishable here
        let parking = ParkingRepository::new(&txn)
            .get_by_id(param.parking_id)
            .await?;
        let parking = match parking {
            Some(parking) if parking.opened => parking,
            _ => return Err(OccupancyError::LotClosed.into()),
        };

        let client = ClientRepository::new(&txn).get_by_id(param.client_id).await?;
        let client = match client {
            Some(client) if client.has_payment_card() => client,
            _ => return Err(OccupancyError::PaymentMethodMissing.into()),
        };

        let occupancy_repo = ClientParkingRepository::new(&txn);

        if occupancy_repo
            .find_open(param.client_id, param.parking_id)
            .await?
            .is_some()
        {
            return Err(OccupancyError::AlreadyParked.into());
        }

        let occupancy = occupancy_repo
            .create(client.id, parking.id, Utc::now())
            .await?;

        let count_available_places = parking.count_available_places - 1;
        let parking = ParkingRepository::new(&txn)
            .update_capacity(parking.id, count_available_places, count_available_places > 0)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            client_id = client.id,
            parking_id = parking.id,
            available = parking.count_available_places,
            "client checked in"
        );

        Ok(Arrival {
            occupancy,
            parking,
            card: client.credit_card.unwrap_or_default(),
        })
    }

    /// Checks a client out of a parking lot.
    ///
    /// Looks up the pair's open stay; closed history rows do not qualify. The
    /// stay must carry an arrival time. On success the stay is closed and one
    /// available place is released, capped at the lot's capacity; a closed lot
    /// reopens once the count rises above zero.
    ///
    /// # Arguments
    /// - `param` - IDs of the departing client and the lot being left
    ///
    /// # Returns
    /// - `Ok(Departure)` - Closed stay, payment marker, and updated lot snapshot
    /// - `Err(AppError::OccupancyErr)` - Rejected transition, no state change
    /// - `Err(AppError)` - Database error
    pub async fn check_out(&self, param: OccupancyParam) -> Result<Departure, AppError> {
        let _guard = self.locks.acquire(param.parking_id).await;

        let txn = self.db.begin().await?;

        let occupancy_repo = ClientParkingRepository::new(&txn);

        let occupancy = occupancy_repo
            .find_open(param.client_id, param.parking_id)
            .await?
            .ok_or(OccupancyError::NoOccupancyRecord)?;

        if occupancy.time_in.is_none() {
            return Err(OccupancyError::NotCheckedIn.into());
        }

        let occupancy = occupancy_repo.close(occupancy.id, Utc::now()).await?;

        let parking_repo = ParkingRepository::new(&txn);

        // The open stay's foreign key guarantees the lot exists
        let parking = parking_repo
            .get_by_id(param.parking_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Parking with id {} not found",
                param.parking_id
            )))?;

        let count_available_places =
            (parking.count_available_places + 1).min(parking.count_places);
        let parking = parking_repo
            .update_capacity(parking.id, count_available_places, count_available_places > 0)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            client_id = param.client_id,
            parking_id = parking.id,
            available = parking.count_available_places,
            "client checked out"
        );

        Ok(Departure {
            occupancy,
            payment: true,
            parking,
        })
    }
}
