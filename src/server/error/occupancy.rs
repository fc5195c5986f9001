use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by the occupancy engine when a transition is rejected.
///
/// The display strings double as the wire-level error messages and are part of
/// the API contract; changing them breaks existing consumers.
#[derive(Error, Debug, PartialEq)]
pub enum OccupancyError {
    /// The target lot is missing or has no available places.
    ///
    /// Raised on check-in before any other validation. A lot that does not
    /// exist is reported the same way as a full one.
    #[error("No place")]
    LotClosed,

    /// The client is missing or has no payment card linked.
    ///
    /// Raised on check-in after the lot check. An empty card token counts as
    /// missing.
    #[error("Link the card to your account")]
    PaymentMethodMissing,

    /// The client already has an open stay at this lot.
    ///
    /// Raised on check-in; a client occupies at most one place per lot at a
    /// time.
    #[error("The client is already in the parking lot")]
    AlreadyParked,

    /// No open stay exists for the (client, lot) pair.
    ///
    /// Raised on check-out when the client never checked in here or already
    /// checked out.
    #[error("Not available")]
    NoOccupancyRecord,

    /// The open stay has no recorded arrival time.
    ///
    /// Raised on check-out for records that were seeded without an entry
    /// timestamp.
    #[error("The client did not enter the parking lot")]
    NotCheckedIn,
}

/// Converts occupancy errors into HTTP responses.
///
/// Every rejected transition maps to 404 Not Found with the error's display
/// string in the JSON body. The uniform status keeps the observable contract
/// of the API stable; the message distinguishes the cases.
///
/// # Returns
/// - 404 Not Found - For every variant, with the contract message as body
impl IntoResponse for OccupancyError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
