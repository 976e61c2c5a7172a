use actix_web::web;

pub mod facilities;
pub mod health;
pub mod meta;

/// Configure application routes, shared by `main.rs` and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Service metadata: /
    cfg.route("/", web::get().to(meta::index));

    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Facility lookup routes: /api/airports/**
    cfg.service(web::scope("/api/airports").configure(facilities::configure_routes));
}
