// Composition root for the employee management service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate concrete adapters and wire them into the services.
// - Expose the services over HTTP.

pub mod config;
pub mod http;
pub mod state;
pub mod telemetry;
