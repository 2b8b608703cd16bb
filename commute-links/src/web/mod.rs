//! Web layer for the commute link page.
//!
//! Serves the page itself and the refresh endpoint its script calls when
//! the tab becomes visible again.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
