//! HTTP API controllers handling requests and responses.
//!
//! This module contains the controller layer of the application, which maps HTTP
//! requests to service calls and serializes the results back to JSON. Controllers
//! are responsible for:
//!
//! - **Request Handling**: Extracting and validating request data
//! - **Service Delegation**: Calling the appropriate service methods
//! - **Response Mapping**: Converting domain models to DTOs with proper status codes
//! - **API Documentation**: Defining OpenAPI annotations for each endpoint

pub mod client;
pub mod occupancy;
pub mod parking;
