pub mod prelude;

pub mod client;
pub mod client_parking;
pub mod parking;
