use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClientDto {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub credit_card: Option<String>,
    pub car_number: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateClientDto {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub credit_card: Option<String>,
    pub car_number: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClientListDto {
    pub clients: Vec<ClientDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClientDetailDto {
    pub client: ClientDto,
}
