//! SeaORM adapter for facility lookups.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{facilities, facility_types};

// Adapter functions return DbErr; the repos layer maps to DomainError via From<DbErr>.

pub async fn find_type_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<facility_types::Model>, sea_orm::DbErr> {
    facility_types::Entity::find()
        .filter(facility_types::Column::Name.eq(name))
        .one(conn)
        .await
}

/// Facilities for an airport in a named category, in insertion order.
///
/// The airport id is not checked for existence; an unknown airport simply
/// matches zero rows.
pub async fn find_by_airport_and_type<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    airport_id: i32,
    type_name: &str,
) -> Result<Vec<facilities::Model>, sea_orm::DbErr> {
    facilities::Entity::find()
        .inner_join(facility_types::Entity)
        .filter(facilities::Column::AirportId.eq(airport_id))
        .filter(facility_types::Column::Name.eq(type_name))
        .order_by_asc(facilities::Column::Id)
        .all(conn)
        .await
}
