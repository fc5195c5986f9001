pub use super::client::Entity as Client;
pub use super::client_parking::Entity as ClientParking;
pub use super::parking::Entity as Parking;
