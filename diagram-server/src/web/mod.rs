//! Web layer for the diagram layout engine.
//!
//! Provides an HTTP endpoint that turns a set of trips into a station axis.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
