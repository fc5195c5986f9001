use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        client_parking::{ArrivalResponseDto, DepartureResponseDto, OccupancyRequestDto},
    },
    server::{
        error::AppError, model::client_parking::OccupancyParam,
        service::occupancy::OccupancyService, state::AppState,
    },
};

/// Tag for grouping occupancy endpoints in OpenAPI documentation
pub static OCCUPANCY_TAG: &str = "occupancy";

/// Check a client in to a parking lot.
///
/// Records a vehicle arrival: the lot must be open, the client must have a
/// payment card linked, and the client must not already be parked at this lot.
/// One available place is consumed; a lot that reaches zero availability
/// closes.
///
/// # Arguments
/// - `state` - Application state containing the database connection and lot locks
/// - `payload` - IDs of the arriving client and the targeted parking lot
///
/// # Returns
/// - `201 Created` - Stay created, with the updated lot and the client's card
/// - `404 Not Found` - Lot closed or missing, card missing, or already parked
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/client_parkings",
    tag = OCCUPANCY_TAG,
    request_body = OccupancyRequestDto,
    responses(
        (status = 201, description = "Successfully checked in", body = ArrivalResponseDto),
        (status = 404, description = "Arrival rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_in(
    State(state): State<AppState>,
    Json(payload): Json<OccupancyRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = OccupancyService::new(&state.db, &state.lot_locks);

    // Convert DTO to server model
    let param = OccupancyParam::from_dto(payload);

    let arrival = service.check_in(param).await?;

    Ok((StatusCode::CREATED, Json(arrival.into_dto())))
}

/// Check a client out of a parking lot.
///
/// Records a vehicle departure: the pair's open stay is closed with a
/// departure time and one available place is released, capped at the lot's
/// capacity. A closed lot reopens once a place frees up.
///
/// # Arguments
/// - `state` - Application state containing the database connection and lot locks
/// - `payload` - IDs of the departing client and the parking lot being left
///
/// # Returns
/// - `201 Created` - Stay closed, with the payment marker and the updated lot
/// - `404 Not Found` - No open stay for the pair, or the stay has no entry time
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/client_parkings",
    tag = OCCUPANCY_TAG,
    request_body = OccupancyRequestDto,
    responses(
        (status = 201, description = "Successfully checked out", body = DepartureResponseDto),
        (status = 404, description = "Departure rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_out(
    State(state): State<AppState>,
    Json(payload): Json<OccupancyRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = OccupancyService::new(&state.db, &state.lot_locks);

    // Convert DTO to server model
    let param = OccupancyParam::from_dto(payload);

    let departure = service.check_out(param).await?;

    Ok((StatusCode::CREATED, Json(departure.into_dto())))
}
