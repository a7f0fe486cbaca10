//! Web layer for the bus finder.
//!
//! Provides JSON endpoints for searching buses and stops.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
