//! HTTP API module for the payroll figures engine.
//!
//! This module provides the REST API endpoint for computing derived
//! payroll figures from monthly salary inputs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
