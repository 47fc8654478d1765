pub mod routes;
pub mod startup;
pub mod state;
pub mod mapper;
pub mod metrics;
pub mod errors;
pub mod openapi;

pub use startup::run_with_config;
