//! Parking lot entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parkings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub address: String,

    #[sea_orm(nullable)]
    pub name: Option<String>,

    /// Derived open flag: must equal `count_available_places > 0`.
    /// Written at creation and by the occupancy engine only.
    pub opened: bool,

    /// Total capacity, fixed at creation.
    pub count_places: i32,

    pub count_available_places: i32,
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
