//! HTTP API module for the sales floor calculation engine.
//!
//! This module is the presentation adapter: it reads raw user-entered
//! text, coerces it to numbers, gates calculation behind the negativity
//! checks, feeds the engine, and returns the formatted result bundle.

mod coerce;
mod handlers;
mod request;
mod response;
mod state;

pub use coerce::{integer_value, numeric_value, signed_integer_value, signed_numeric_value};
pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
