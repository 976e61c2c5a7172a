use actix_web::HttpResponse;
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize)]
struct MetaResponse {
    message: String,
    endpoints: MetaEndpoints,
}

#[derive(Debug, Serialize)]
struct MetaEndpoints {
    facilities: String,
}

/// Informational landing route.
pub async fn index() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(MetaResponse {
        message: "Welcome to Airport Facilities API".to_string(),
        endpoints: MetaEndpoints {
            facilities: "/api/airports/{airport_id}/facilities?type={facility_type}".to_string(),
        },
    }))
}
