use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Facility categories; `name` is the unique, case-sensitive match key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "facility_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::facilities::Entity")]
    Facilities,
}

impl Related<super::facilities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Facilities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
