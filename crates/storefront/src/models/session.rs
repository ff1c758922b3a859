//! Session-related types.
//!
//! All session-scoped mutable state (logged-in user, active group, linking
//! progress) lives under explicit keys here rather than ambient globals, with
//! load/save at the route boundary.

use serde::{Deserialize, Serialize};

use uniform_store_core::{Email, UserId};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
}

/// Session keys for authentication and shopping state.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the active organizational group (contract pricing).
    pub const ACTIVE_GROUP: &str = "active_group";

    /// Key for the retail account linking state machine.
    pub const RETAIL_LINK: &str = "retail_link";
}
