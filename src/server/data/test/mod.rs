mod client_parking;
mod parking;
