use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        client::{create_client, get_client_by_id, get_clients},
        occupancy::{check_in, check_out},
        parking::{create_parking, get_parking_by_id, get_parkings},
    },
    state::AppState,
};

/// OpenAPI documentation for the parking service API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Carpark API",
        description = "Parking lot management service: client registry, lot registry, and arrival/departure tracking"
    ),
    paths(
        crate::server::controller::client::get_clients,
        crate::server::controller::client::create_client,
        crate::server::controller::client::get_client_by_id,
        crate::server::controller::parking::get_parkings,
        crate::server::controller::parking::create_parking,
        crate::server::controller::parking::get_parking_by_id,
        crate::server::controller::occupancy::check_in,
        crate::server::controller::occupancy::check_out,
    ),
    components(schemas(
        crate::model::api::ErrorDto,
        crate::model::client::ClientDto,
        crate::model::client::CreateClientDto,
        crate::model::client::ClientListDto,
        crate::model::client::ClientDetailDto,
        crate::model::parking::ParkingDto,
        crate::model::parking::CreateParkingDto,
        crate::model::parking::ParkingListDto,
        crate::model::parking::ParkingDetailDto,
        crate::model::client_parking::OccupancyDto,
        crate::model::client_parking::OccupancyRequestDto,
        crate::model::client_parking::ArrivalClientDto,
        crate::model::client_parking::ArrivalResponseDto,
        crate::model::client_parking::DepartureInfoDto,
        crate::model::client_parking::DepartureResponseDto,
    )),
    tags(
        (name = "client", description = "Client registry operations"),
        (name = "parking", description = "Parking lot registry operations"),
        (name = "occupancy", description = "Arrival and departure transitions"),
    ),
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clients", get(get_clients).post(create_client))
        .route("/clients/{client_id}", get(get_client_by_id))
        .route("/parkings", get(get_parkings).post(create_parking))
        .route("/parkings/{parking_id}", get(get_parking_by_id))
        .route("/client_parkings", post(check_in).delete(check_out))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
