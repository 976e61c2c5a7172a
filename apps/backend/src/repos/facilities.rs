//! Facility repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::facilities_sea as facilities_adapter;
use crate::errors::domain::DomainError;

/// Facility domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facility {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub operating_hours: Option<String>,
    pub facility_type_id: i32,
    pub airport_id: i32,
}

/// Facilities for an airport in a named category, ordered by insertion.
pub async fn find_by_airport_and_type<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    airport_id: i32,
    type_name: &str,
) -> Result<Vec<Facility>, DomainError> {
    let models = facilities_adapter::find_by_airport_and_type(conn, airport_id, type_name).await?;
    Ok(models.into_iter().map(Facility::from).collect())
}

impl From<crate::entities::facilities::Model> for Facility {
    fn from(model: crate::entities::facilities::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            location: model.location,
            description: model.description,
            operating_hours: model.operating_hours,
            facility_type_id: model.facility_type_id,
            airport_id: model.airport_id,
        }
    }
}
