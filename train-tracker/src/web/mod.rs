//! Web layer for the train tracker.
//!
//! Serves voyage snapshots as JSON, one path prefix per carrier.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
