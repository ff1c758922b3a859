//! User domain types.
//!
//! These types represent validated domain objects separate from database row
//! types.

use chrono::{DateTime, Utc};

use uniform_store_core::{Email, UserId};

/// An online storefront account.
///
/// An account created through retail linking carries the account number of
/// the retail record it references; purchase history is associated through
/// that reference.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Retail account this online identity is linked to, if any.
    pub retail_account_number: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this account is linked to a retail store record.
    #[must_use]
    pub const fn is_retail_linked(&self) -> bool {
        self.retail_account_number.is_some()
    }
}
