//! Occupancy entity: one client's stay at one parking lot.
//!
//! A row is open while `time_out` is NULL. Rows are created on check-in and
//! closed on check-out; they are never deleted, forming the stay history.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "client_parking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub client_id: i32,
    pub parking_id: i32,

    #[sea_orm(nullable)]
    pub time_in: Option<DateTimeUtc>,

    #[sea_orm(nullable)]
    pub time_out: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::parking::Entity",
        from = "Column::ParkingId",
        to = "super::parking::Column::Id"
    )]
    Parking,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::parking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
