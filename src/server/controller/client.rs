use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        client::{ClientDetailDto, ClientListDto, CreateClientDto},
    },
    server::{
        error::AppError, model::client::CreateClientParam, service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// Get all registered clients.
///
/// Returns every client registered with the parking service, ordered by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of registered clients
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/clients",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved clients", body = ClientListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ClientService::new(&state.db);

    let clients = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ClientListDto {
            clients: clients.into_iter().map(|client| client.into_dto()).collect(),
        }),
    ))
}

/// Register a new client.
///
/// Registers a client with their name, optional payment card token, and car
/// registration number. The car number must not already be registered.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Client registration data
///
/// # Returns
/// - `201 Created` - Successfully registered client
/// - `400 Bad Request` - Car number already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/clients",
    tag = CLIENT_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Successfully registered client", body = ClientDetailDto),
        (status = 400, description = "Car number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClientService::new(&state.db);

    // Convert DTO to server model
    let param = CreateClientParam::from_dto(payload);

    let client = service.create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ClientDetailDto {
            client: client.into_dto(),
        }),
    ))
}

/// Get a specific client by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `client_id` - Client ID to fetch
///
/// # Returns
/// - `200 OK` - Client details
/// - `404 Not Found` - No client with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/clients/{client_id}",
    tag = CLIENT_TAG,
    params(
        ("client_id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved client", body = ClientDetailDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client_by_id(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClientService::new(&state.db);

    let client = service.get_by_id(client_id).await?;

    match client {
        Some(client) => Ok((
            StatusCode::OK,
            Json(ClientDetailDto {
                client: client.into_dto(),
            }),
        )),
        None => Err(AppError::NotFound("Not found".to_string())),
    }
}
