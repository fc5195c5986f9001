//! Client entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub surname: String,

    /// Payment-card token. Absent or empty means the client cannot check in.
    #[sea_orm(nullable)]
    pub credit_card: Option<String>,

    /// License plate, unique across all clients.
    #[sea_orm(unique)]
    pub car_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::client_parking::Entity")]
    ClientParking,
}

impl Related<super::client_parking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClientParking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
