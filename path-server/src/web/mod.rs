//! Web layer for the PATH schedule server.
//!
//! Serves compact plain-text answers for the watch client, or JSON when
//! the client asks for it.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
