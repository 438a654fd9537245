//! HTTP front-end for EventHub.
//!
//! Serves the listing and detail pages as HTML and the same data as JSON.
//! The binary in `main.rs` wires configuration and logging around
//! [`build_router`].

pub mod render;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
