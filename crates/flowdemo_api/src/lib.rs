//! HTTP request-handler layer.
//!
//! # Responsibility
//! - Map HTTP verbs and paths onto core services.
//! - Wrap every result in the `ApiResponse` envelope with a matching status.
//!
//! # Invariants
//! - Handlers never panic; faults become 500 envelopes.
//! - No business rule lives here; validation and store semantics stay in
//!   `flowdemo_core`.

pub mod config;
pub mod envelope;
pub mod handlers;
pub mod state;

pub use config::ServerConfig;
pub use envelope::ApiResponse;
pub use handlers::{router, ENDPOINTS, WELCOME_TEXT};
pub use state::{AppState, SharedState};
