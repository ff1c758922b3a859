//! Catalog domain types: products, color variants, and organizational groups.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{GroupId, ProductId};

/// A color variant of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductColor {
    /// Display name (e.g., "Ceil Blue").
    pub name: String,
    /// Hex swatch used by clients (e.g., "#7dd3fc").
    pub hex: String,
    /// Whether this variant can currently be ordered.
    pub available: bool,
}

/// A catalog product.
///
/// Products are immutable for the duration of a session once loaded; every
/// product carries both a retail and a contract price, and
/// [`PricingContext`](crate::pricing::PricingContext) decides which one
/// applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Vendor style code (e.g., "BOT-001").
    pub code: String,
    pub name: String,
    pub brand: String,
    pub department: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Price shown to individual shoppers.
    pub retail_price: Decimal,
    /// Discounted price shown while a group contract is active.
    pub contract_price: Decimal,
    pub colors: Vec<ProductColor>,
    pub sizes: Vec<String>,
    pub in_stock: bool,
    /// Whether this product can carry an embroidered group logo.
    pub logo_eligible: bool,
}

impl Product {
    /// Whether the product has a color variant with the given name
    /// (case-insensitive). Variant availability is deliberately not checked;
    /// an unavailable color still matches for filtering purposes.
    #[must_use]
    pub fn has_color(&self, name: &str) -> bool {
        self.colors.iter().any(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Whether the product is offered in the given size label
    /// (case-insensitive).
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s.eq_ignore_ascii_case(size))
    }
}

/// An organizational contract entity ("group").
///
/// Selected at login by contract code; grants contract pricing and,
/// optionally, logo customization for the rest of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    /// Unique contract code, matched case-insensitively (e.g., "OHH").
    pub code: String,
    pub name: String,
    pub description: String,
    /// Whether members may add an embroidered logo to eligible products.
    pub logo_customization: bool,
    pub is_active: bool,
}

impl Group {
    /// Whether this group answers to the given contract code.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace;
    /// inactive groups never match.
    #[must_use]
    pub fn matches_code(&self, code: &str) -> bool {
        self.is_active && self.code.eq_ignore_ascii_case(code.trim())
    }
}

/// Find the group answering to a contract code.
///
/// Returns `None` when no active group matches; callers must leave their
/// session state untouched in that case.
#[must_use]
pub fn find_group<'a>(groups: &'a [Group], code: &str) -> Option<&'a Group> {
    groups.iter().find(|g| g.matches_code(code))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use uuid::Uuid;

    pub(crate) fn product(name: &str, code: &str) -> Product {
        Product {
            id: ProductId::new(Uuid::new_v4()),
            code: code.to_owned(),
            name: name.to_owned(),
            brand: "Barco".to_owned(),
            department: "Scrubs".to_owned(),
            description: String::new(),
            image_url: None,
            retail_price: Decimal::new(3299, 2),
            contract_price: Decimal::new(2899, 2),
            colors: vec![
                ProductColor {
                    name: "Navy".to_owned(),
                    hex: "#1e3a8a".to_owned(),
                    available: true,
                },
                ProductColor {
                    name: "Wine".to_owned(),
                    hex: "#7f1d1d".to_owned(),
                    available: false,
                },
            ],
            sizes: vec!["S".to_owned(), "M".to_owned(), "L".to_owned()],
            in_stock: true,
            logo_eligible: true,
        }
    }

    pub(crate) fn group(name: &str, code: &str, logo_customization: bool) -> Group {
        Group {
            id: GroupId::new(Uuid::new_v4()),
            code: code.to_owned(),
            name: name.to_owned(),
            description: String::new(),
            logo_customization,
            is_active: true,
        }
    }

    #[test]
    fn test_has_color_case_insensitive() {
        let p = product("Scrub Top", "BOT-001");
        assert!(p.has_color("navy"));
        assert!(p.has_color("NAVY"));
        assert!(!p.has_color("White"));
    }

    #[test]
    fn test_has_color_ignores_availability() {
        let p = product("Scrub Top", "BOT-001");
        assert!(p.has_color("Wine"));
    }

    #[test]
    fn test_find_group_case_insensitive() {
        let groups = vec![
            group("OhioHealth", "OHH", true),
            group("Mount Carmel Health", "MCH", true),
        ];

        assert_eq!(find_group(&groups, "OHH").unwrap().name, "OhioHealth");
        assert_eq!(find_group(&groups, "ohh").unwrap().name, "OhioHealth");
        assert_eq!(find_group(&groups, " mch ").unwrap().name, "Mount Carmel Health");
        assert!(find_group(&groups, "XYZ").is_none());
    }

    #[test]
    fn test_find_group_skips_inactive() {
        let mut g = group("Nationwide Children's", "NCH", false);
        g.is_active = false;
        assert!(find_group(&[g], "NCH").is_none());
    }
}
