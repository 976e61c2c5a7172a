use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::facilities::{self, Facility};
use crate::repos::facility_types;

/// Look up all facilities of a category for an airport.
///
/// The category is validated first: an unknown name fails with
/// `NotFoundKind::FacilityType` before any facility rows are read. A known
/// category with no rows for the airport fails with
/// `NotFoundKind::Facilities`. Airport existence is never checked, so an
/// unknown airport id is indistinguishable from a known airport without
/// facilities of the category.
pub async fn lookup_facilities<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    airport_id: i32,
    facility_type: &str,
) -> Result<Vec<Facility>, DomainError> {
    debug!(airport_id, facility_type, "facilities.lookup");

    if facility_types::find_by_name(conn, facility_type)
        .await?
        .is_none()
    {
        return Err(DomainError::not_found(
            NotFoundKind::FacilityType,
            format!("Facility type \"{facility_type}\" not found"),
        ));
    }

    let records = facilities::find_by_airport_and_type(conn, airport_id, facility_type).await?;

    if records.is_empty() {
        return Err(DomainError::not_found(
            NotFoundKind::Facilities,
            format!("No {facility_type} facilities found for airport {airport_id}"),
        ));
    }

    debug!(airport_id, count = records.len(), "facilities.lookup_ok");
    Ok(records)
}
