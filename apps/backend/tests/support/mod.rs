pub mod app_builder;

pub use app_builder::create_test_app;

// Logging is initialized once per test binary.
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
