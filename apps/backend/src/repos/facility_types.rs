//! Facility type repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::facilities_sea as facilities_adapter;
use crate::errors::domain::DomainError;

/// Facility category domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityType {
    pub id: i32,
    pub name: String,
}

/// Exact, case-sensitive lookup of a category by name.
pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<FacilityType>, DomainError> {
    let model = facilities_adapter::find_type_by_name(conn, name).await?;
    Ok(model.map(FacilityType::from))
}

impl From<crate::entities::facility_types::Model> for FacilityType {
    fn from(model: crate::entities::facility_types::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
