use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "facilities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    #[sea_orm(column_name = "operating_hours")]
    pub operating_hours: Option<String>,
    #[sea_orm(column_name = "facility_type_id")]
    pub facility_type_id: i32,
    #[sea_orm(column_name = "airport_id")]
    pub airport_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airports::Entity",
        from = "Column::AirportId",
        to = "super::airports::Column::Id"
    )]
    Airports,
    #[sea_orm(
        belongs_to = "super::facility_types::Entity",
        from = "Column::FacilityTypeId",
        to = "super::facility_types::Column::Id"
    )]
    FacilityTypes,
}

impl Related<super::airports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airports.def()
    }
}

impl Related<super::facility_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FacilityTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
