//! Retail store customer records and order history.
//!
//! These records originate in the physical store's system; online accounts
//! can be linked to them by exact match on the (phone, zip, account number)
//! triple.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fulfillment status of a historical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Database/wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }

    /// Parse the database/wire representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "shipped" => Some(Self::Shipped),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }
}

/// Where an order was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSource {
    Online,
    Retail,
}

impl OrderSource {
    /// Database/wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Retail => "retail",
        }
    }

    /// Parse the database/wire representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "online" => Some(Self::Online),
            "retail" => Some(Self::Retail),
            _ => None,
        }
    }
}

/// A historical order attached to a retail customer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailOrder {
    /// Store-assigned order number (opaque, e.g. "R1001").
    pub id: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_on: NaiveDate,
    pub source: OrderSource,
}

/// A pre-existing retail store account.
///
/// The account number is an opaque string; no format is assumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailCustomer {
    pub account_number: String,
    /// Phone number stored as bare digits.
    pub phone: String,
    pub zip_code: String,
    pub first_name: String,
    pub last_name: String,
    pub orders: Vec<RetailOrder>,
}

impl RetailCustomer {
    /// Exact-match lookup on all three fields simultaneously; no
    /// partial-match fallback. The phone argument is normalized to digits
    /// before comparison.
    #[must_use]
    pub fn matches(&self, phone: &str, zip_code: &str, account_number: &str) -> bool {
        self.phone == normalize_phone(phone)
            && self.zip_code == zip_code.trim()
            && self.account_number == account_number.trim()
    }
}

/// Strip a phone number down to its digits.
///
/// The storefront formats input as "(614) 123-4567"; stored records keep bare
/// digits, so both sides compare on digits only.
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn customer() -> RetailCustomer {
        RetailCustomer {
            account_number: "R123456".to_owned(),
            phone: "6141234567".to_owned(),
            zip_code: "43215".to_owned(),
            first_name: "Sarah".to_owned(),
            last_name: "Johnson".to_owned(),
            orders: vec![RetailOrder {
                id: "R1001".to_owned(),
                subtotal: Decimal::new(7598, 2),
                tax: Decimal::new(608, 2),
                total: Decimal::new(8206, 2),
                status: OrderStatus::Delivered,
                created_on: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                source: OrderSource::Retail,
            }],
        }
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("(614) 123-4567"), "6141234567");
        assert_eq!(normalize_phone("6141234567"), "6141234567");
        assert_eq!(normalize_phone("+1 614.123.4567"), "16141234567");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn test_matches_exact_triple() {
        let c = customer();
        assert!(c.matches("6141234567", "43215", "R123456"));
        assert!(c.matches("(614) 123-4567", "43215", "R123456"));
    }

    #[test]
    fn test_altering_any_field_fails() {
        let c = customer();
        assert!(!c.matches("6149876543", "43215", "R123456"));
        assert!(!c.matches("6141234567", "43201", "R123456"));
        assert!(!c.matches("6141234567", "43215", "R999999"));
    }

    #[test]
    fn test_account_number_is_opaque() {
        let mut c = customer();
        c.account_number = "RC001234".to_owned();
        assert!(c.matches("6141234567", "43215", "RC001234"));
    }

    #[test]
    fn test_status_and_source_round_trip() {
        assert_eq!(OrderStatus::parse("delivered"), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::parse("lost"), None);
        assert_eq!(OrderStatus::Shipped.as_str(), "shipped");
        assert_eq!(OrderSource::parse("retail"), Some(OrderSource::Retail));
        assert_eq!(OrderSource::Online.as_str(), "online");
    }
}
