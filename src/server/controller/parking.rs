use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        parking::{CreateParkingDto, ParkingDetailDto, ParkingListDto},
    },
    server::{
        error::AppError, model::parking::CreateParkingParam, service::parking::ParkingService,
        state::AppState,
    },
};

/// Tag for grouping parking lot endpoints in OpenAPI documentation
pub static PARKING_TAG: &str = "parking";

/// Get all parking lots.
///
/// Returns every parking lot known to the service, ordered by ID, with their
/// live availability counts.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of parking lots
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/parkings",
    tag = PARKING_TAG,
    responses(
        (status = 200, description = "Successfully retrieved parking lots", body = ParkingListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parkings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ParkingService::new(&state.db);

    let parkings = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ParkingListDto {
            parkings: parkings
                .into_iter()
                .map(|parking| parking.into_dto())
                .collect(),
        }),
    ))
}

/// Create a new parking lot.
///
/// Creates a parking lot with a unique address, a total capacity, and an
/// initial availability. The stored open flag is derived from the initial
/// availability; any flag in the request body is ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Parking lot creation data
///
/// # Returns
/// - `201 Created` - Successfully created parking lot
/// - `400 Bad Request` - Counts out of range or address already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/parkings",
    tag = PARKING_TAG,
    request_body = CreateParkingDto,
    responses(
        (status = 201, description = "Successfully created parking lot", body = ParkingDetailDto),
        (status = 400, description = "Counts out of range or address already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_parking(
    State(state): State<AppState>,
    Json(payload): Json<CreateParkingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParkingService::new(&state.db);

    // Convert DTO to server model
    let param = CreateParkingParam::from_dto(payload);

    let parking = service.create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ParkingDetailDto {
            parking: parking.into_dto(),
        }),
    ))
}

/// Get a specific parking lot by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `parking_id` - Parking lot ID to fetch
///
/// # Returns
/// - `200 OK` - Parking lot details
/// - `404 Not Found` - No parking lot with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/parkings/{parking_id}",
    tag = PARKING_TAG,
    params(
        ("parking_id" = i32, Path, description = "Parking lot ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved parking lot", body = ParkingDetailDto),
        (status = 404, description = "Parking lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parking_by_id(
    State(state): State<AppState>,
    Path(parking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParkingService::new(&state.db);

    let parking = service.get_by_id(parking_id).await?;

    match parking {
        Some(parking) => Ok((
            StatusCode::OK,
            Json(ParkingDetailDto {
                parking: parking.into_dto(),
            }),
        )),
        None => Err(AppError::NotFound("Not found".to_string())),
    }
}
