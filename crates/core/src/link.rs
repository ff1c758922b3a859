//! The retail account linking state machine.
//!
//! Linking associates a new online identity with a pre-existing retail store
//! account in two steps: locate the account by exact (phone, zip, account
//! number) match, then create online credentials against the located record.
//!
//! The flow is modeled as typed states with a single transition function so
//! it can be unit tested without simulating any HTTP navigation. The
//! storefront holds the current state in the session and applies one event
//! per request; a failed transition leaves the stored state untouched.

use serde::{Deserialize, Serialize};

use crate::retail::RetailCustomer;
use crate::types::{Email, EmailError};

/// Errors from a rejected transition. The machine stays in its prior state.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LinkError {
    /// No retail record matched the lookup triple.
    #[error("no retail account matches the provided information")]
    NoMatchingAccount,

    /// A required field was blank.
    #[error("all fields are required")]
    MissingFields,

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The email address is not usable as an online identity.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Credentials were submitted before an account was located.
    #[error("no retail account has been located yet")]
    NotLocated,

    /// The flow already completed; a linked identity is terminal.
    #[error("this retail account has already been linked")]
    AlreadyLinked,
}

/// The online identity produced by a completed linking flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedIdentity {
    pub email: Email,
    pub account_number: String,
    pub first_name: String,
    pub last_name: String,
}

/// States of the linking flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LinkState {
    /// No account located yet.
    Unlinked,
    /// A retail record was found; awaiting credential creation.
    Found(RetailCustomer),
    /// Terminal: credentials exist and reference the retail record.
    Linked(LinkedIdentity),
}

impl Default for LinkState {
    fn default() -> Self {
        Self::Unlinked
    }
}

/// Events driving the linking flow.
///
/// `Lookup` carries the result of the directory search rather than the raw
/// triple; matching itself lives with [`RetailCustomer::matches`] and the
/// repository, keeping this machine pure.
#[derive(Debug, Clone)]
pub enum LinkEvent {
    /// A lookup completed, possibly locating a record.
    Lookup { customer: Option<RetailCustomer> },
    /// The shopper submitted credentials for the located record.
    CreateCredentials {
        email: String,
        password: String,
        confirm_password: String,
    },
}

impl LinkState {
    /// The single transition function.
    ///
    /// Returns the successor state, or the error that rejected the event.
    /// On error the caller keeps its current state; `Found` survives a bad
    /// credential submission, and a failed lookup returns to `Unlinked`.
    ///
    /// # Errors
    ///
    /// See [`LinkError`] for every rejection.
    pub fn apply(&self, event: LinkEvent) -> Result<Self, LinkError> {
        match (self, event) {
            (Self::Linked(_), _) => Err(LinkError::AlreadyLinked),

            // A lookup can be re-run from Unlinked or Found (the shopper may
            // locate a different record before creating credentials).
            (Self::Unlinked | Self::Found(_), LinkEvent::Lookup { customer }) => customer
                .map(Self::Found)
                .ok_or(LinkError::NoMatchingAccount),

            (Self::Unlinked, LinkEvent::CreateCredentials { .. }) => Err(LinkError::NotLocated),

            (
                Self::Found(customer),
                LinkEvent::CreateCredentials {
                    email,
                    password,
                    confirm_password,
                },
            ) => {
                if email.trim().is_empty() || password.is_empty() || confirm_password.is_empty() {
                    return Err(LinkError::MissingFields);
                }
                if password != confirm_password {
                    return Err(LinkError::PasswordMismatch);
                }
                let email = Email::parse(&email)?;

                Ok(Self::Linked(LinkedIdentity {
                    email,
                    account_number: customer.account_number.clone(),
                    first_name: customer.first_name.clone(),
                    last_name: customer.last_name.clone(),
                }))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::retail::tests::customer;

    fn credentials(email: &str, password: &str, confirm: &str) -> LinkEvent {
        LinkEvent::CreateCredentials {
            email: email.to_owned(),
            password: password.to_owned(),
            confirm_password: confirm.to_owned(),
        }
    }

    #[test]
    fn test_happy_path_unlinked_to_linked() {
        let state = LinkState::Unlinked;

        let state = state
            .apply(LinkEvent::Lookup {
                customer: Some(customer()),
            })
            .unwrap();
        assert!(matches!(state, LinkState::Found(_)));

        let state = state
            .apply(credentials("sarah@example.com", "hunter2hunter2", "hunter2hunter2"))
            .unwrap();

        match state {
            LinkState::Linked(identity) => {
                assert_eq!(identity.email.as_str(), "sarah@example.com");
                assert_eq!(identity.account_number, "R123456");
                assert_eq!(identity.first_name, "Sarah");
            }
            other => panic!("expected Linked, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_lookup_reports_no_match() {
        let state = LinkState::Unlinked;
        let err = state.apply(LinkEvent::Lookup { customer: None }).unwrap_err();
        assert!(matches!(err, LinkError::NoMatchingAccount));
    }

    #[test]
    fn test_password_mismatch_stays_found() {
        let state = LinkState::Found(customer());
        let err = state
            .apply(credentials("sarah@example.com", "one-password", "another"))
            .unwrap_err();
        assert!(matches!(err, LinkError::PasswordMismatch));
        // Caller keeps `state`; it is still Found.
        assert!(matches!(state, LinkState::Found(_)));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let state = LinkState::Found(customer());
        assert!(matches!(
            state.apply(credentials("", "pw", "pw")),
            Err(LinkError::MissingFields)
        ));
        assert!(matches!(
            state.apply(credentials("sarah@example.com", "", "")),
            Err(LinkError::MissingFields)
        ));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let state = LinkState::Found(customer());
        assert!(matches!(
            state.apply(credentials("not-an-email", "pw123456", "pw123456")),
            Err(LinkError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_credentials_before_lookup_rejected() {
        let state = LinkState::Unlinked;
        assert!(matches!(
            state.apply(credentials("sarah@example.com", "pw123456", "pw123456")),
            Err(LinkError::NotLocated)
        ));
    }

    #[test]
    fn test_relookup_from_found_is_allowed() {
        let state = LinkState::Found(customer());
        let mut other = customer();
        other.account_number = "R789012".to_owned();

        let state = state
            .apply(LinkEvent::Lookup {
                customer: Some(other),
            })
            .unwrap();
        match state {
            LinkState::Found(c) => assert_eq!(c.account_number, "R789012"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_linked_is_terminal() {
        let state = LinkState::Found(customer())
            .apply(credentials("sarah@example.com", "pw123456", "pw123456"))
            .unwrap();

        assert!(matches!(
            state.apply(LinkEvent::Lookup {
                customer: Some(customer())
            }),
            Err(LinkError::AlreadyLinked)
        ));
    }
}
