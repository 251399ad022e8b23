//! API route handlers.

mod auth;
mod members;

pub use auth::*;
pub use members::*;
