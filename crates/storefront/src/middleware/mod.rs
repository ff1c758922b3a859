//! Middleware: session layer configuration and auth extractors.

pub mod auth;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, active_group, clear_current_user, set_current_user};
pub use session::create_session_layer;
