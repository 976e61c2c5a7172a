// HTTP tests for the facility lookup endpoint.
//
// Each test builds its own in-memory store via the real migrator, so the
// seeded reference data (3 airports, 4 facility types, 9 facilities) is
// exactly what the handlers see.
//
// Run with:
//   cargo test --test routes_facilities

mod support;

use actix_web::test;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::DbProfile;
use sea_orm::{ActiveModelTrait, NotSet, Set};
use serde_json::{json, Value};

use crate::support::create_test_app;

async fn seeded_state() -> AppState {
    build_state()
        .with_db(DbProfile::Test)
        .build()
        .await
        .expect("build test state")
}

#[actix_web::test]
async fn lookup_returns_seeded_facilities_for_airport_and_type() {
    let state = seeded_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let req = test::TestRequest::get()
        .uri("/api/airports/1/facilities?type=restaurant")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!([{
            "id": 1,
            "name": "Dilli Streat",
            "location": "Terminal 3, Level 3",
            "description": "Indian street food",
            "hours": "24/7"
        }])
    );
}

#[actix_web::test]
async fn lookup_preserves_insertion_order_and_null_fields() {
    let state = seeded_state().await;

    // Two more restaurants for airport 1, the second without description
    // or hours. Inserted through the entities; the service itself never
    // writes.
    let conn = state.db().expect("test state has a db");
    backend::entities::facilities::ActiveModel {
        id: NotSet,
        name: Set("Chai Point".to_string()),
        location: Set("Terminal 3, Level 1".to_string()),
        description: Set(Some("Tea and snacks".to_string())),
        operating_hours: Set(Some("5:00-23:00".to_string())),
        facility_type_id: Set(1),
        airport_id: Set(1),
    }
    .insert(conn)
    .await
    .expect("insert facility");
    backend::entities::facilities::ActiveModel {
        id: NotSet,
        name: Set("Terminal Grill".to_string()),
        location: Set("Terminal 3, Level 2".to_string()),
        description: Set(None),
        operating_hours: Set(None),
        facility_type_id: Set(1),
        airport_id: Set(1),
    }
    .insert(conn)
    .await
    .expect("insert facility");

    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let req = test::TestRequest::get()
        .uri("/api/airports/1/facilities?type=restaurant")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

    let records = body.as_array().expect("array body");
    assert_eq!(records.len(), 3);

    let names: Vec<&str> = records
        .iter()
        .map(|r| r["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, ["Dilli Streat", "Chai Point", "Terminal Grill"]);

    let ids: Vec<i64> = records
        .iter()
        .map(|r| r["id"].as_i64().expect("id"))
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not ascending: {ids:?}");

    // Nullable fields serialize as null, not as absent keys
    assert_eq!(records[2]["description"], Value::Null);
    assert_eq!(records[2]["hours"], Value::Null);
}

#[actix_web::test]
async fn missing_type_is_rejected_before_store_access() {
    let state = seeded_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let req = test::TestRequest::get()
        .uri("/api/airports/1/facilities")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Facility type is required"}));
}

#[actix_web::test]
async fn empty_type_is_rejected_like_missing() {
    let state = seeded_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let req = test::TestRequest::get()
        .uri("/api/airports/42/facilities?type=")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Facility type is required"}));
}

#[actix_web::test]
async fn unknown_type_yields_category_not_found() {
    let state = seeded_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let req = test::TestRequest::get()
        .uri("/api/airports/1/facilities?type=spa")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Facility type \"spa\" not found"}));
}

#[actix_web::test]
async fn unknown_type_wins_over_unknown_airport() {
    let state = seeded_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    // The category check runs first, so the airport id is irrelevant here
    let req = test::TestRequest::get()
        .uri("/api/airports/999/facilities?type=spa")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Facility type \"spa\" not found"}));
}

#[actix_web::test]
async fn known_type_without_rows_yields_message_not_found() {
    let state = seeded_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    // "bathroom" is seeded as a category but has no facility rows
    let req = test::TestRequest::get()
        .uri("/api/airports/1/facilities?type=bathroom")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"message": "No bathroom facilities found for airport 1"})
    );
}

#[actix_web::test]
async fn unknown_airport_is_reported_as_empty_result() {
    let state = seeded_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    // No airport existence check: airport 99 does not exist, but "lounge" does
    let req = test::TestRequest::get()
        .uri("/api/airports/99/facilities?type=lounge")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"message": "No lounge facilities found for airport 99"})
    );
}

#[actix_web::test]
async fn repeated_lookups_are_idempotent() {
    let state = seeded_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let req = test::TestRequest::get()
            .uri("/api/airports/2/facilities?type=shop")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        bodies.push(test::read_body_json::<Value, _>(resp).await);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
    assert_eq!(bodies[0][0]["name"], "Mumbai Shopping");
}

#[actix_web::test]
async fn non_integer_airport_id_is_not_routed() {
    let state = seeded_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let req = test::TestRequest::get()
        .uri("/api/airports/DEL/facilities?type=restaurant")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
}
