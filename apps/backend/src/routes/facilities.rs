use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::error::AppError;
use crate::repos::facilities::Facility;
use crate::services::facilities as facilities_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct FacilitiesQuery {
    #[serde(rename = "type")]
    pub facility_type: Option<String>,
}

/// Wire shape of a facility record; `operating_hours` surfaces as `hours`.
#[derive(Debug, Serialize)]
pub struct FacilityResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub hours: Option<String>,
}

impl From<Facility> for FacilityResponse {
    fn from(value: Facility) -> Self {
        Self {
            id: value.id,
            name: value.name,
            location: value.location,
            description: value.description,
            hours: value.operating_hours,
        }
    }
}

async fn get_facilities(
    path: web::Path<i32>,
    query: web::Query<FacilitiesQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let airport_id = path.into_inner();

    // Required parameter; rejected before any store access.
    let facility_type = match query.into_inner().facility_type {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AppError::invalid("Facility type is required")),
    };

    let db = require_db(&app_state)?;
    let records = facilities_service::lookup_facilities(db, airport_id, &facility_type).await?;

    let body: Vec<FacilityResponse> = records.into_iter().map(FacilityResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{airport_id}/facilities").route(web::get().to(get_facilities)),
    );
}

#[cfg(test)]
mod tests {
    use super::{FacilitiesQuery, FacilityResponse};
    use crate::repos::facilities::Facility;

    #[test]
    fn response_maps_operating_hours_to_hours() {
        let response = FacilityResponse::from(Facility {
            id: 1,
            name: "Dilli Streat".to_string(),
            location: "Terminal 3, Level 3".to_string(),
            description: Some("Indian street food".to_string()),
            operating_hours: Some("24/7".to_string()),
            facility_type_id: 1,
            airport_id: 1,
        });

        assert_eq!(response.hours.as_deref(), Some("24/7"));
        assert_eq!(response.description.as_deref(), Some("Indian street food"));
    }

    #[test]
    fn query_parses_type_parameter() {
        let query: FacilitiesQuery =
            serde_urlencoded::from_str("type=restaurant").expect("parse query");
        assert_eq!(query.facility_type.as_deref(), Some("restaurant"));

        let query: FacilitiesQuery = serde_urlencoded::from_str("").expect("parse query");
        assert!(query.facility_type.is_none());
    }
}
