//! The catalog filter engine.
//!
//! A pure function over the in-memory product list: every active predicate is
//! ANDed, values within a predicate are ORed, and the output preserves the
//! input order (stable filter, no re-sort).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::pricing::PricingContext;

/// Filter criteria for the catalog.
///
/// Empty fields mean "no restriction": an empty keyword or an empty selection
/// set never excludes a product. Price bounds are inclusive on both ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Keyword matched against product name and code (case-insensitive).
    pub keyword: Option<String>,
    /// Inclusive lower price bound on the effective price.
    pub price_min: Option<Decimal>,
    /// Inclusive upper price bound on the effective price.
    pub price_max: Option<Decimal>,
    /// Accepted brands; empty means any.
    pub brands: Vec<String>,
    /// Accepted departments; empty means any.
    pub departments: Vec<String>,
    /// Accepted color variant names; empty means any.
    pub colors: Vec<String>,
}

impl FilterCriteria {
    /// Whether the price bounds are coherent (`min <= max` when both set).
    #[must_use]
    pub fn has_valid_price_range(&self) -> bool {
        match (self.price_min, self.price_max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    /// Whether a single product passes every active predicate.
    #[must_use]
    pub fn matches(&self, product: &Product, pricing: &PricingContext) -> bool {
        self.matches_keyword(product)
            && self.matches_price(product, pricing)
            && self.matches_brand(product)
            && self.matches_department(product)
            && self.matches_color(product)
    }

    fn matches_keyword(&self, product: &Product) -> bool {
        let Some(keyword) = self.keyword.as_deref().map(str::trim) else {
            return true;
        };
        if keyword.is_empty() {
            return true;
        }
        let keyword = keyword.to_lowercase();
        product.name.to_lowercase().contains(&keyword)
            || product.code.to_lowercase().contains(&keyword)
    }

    fn matches_price(&self, product: &Product, pricing: &PricingContext) -> bool {
        let price = pricing.effective_price(product);
        if self.price_min.is_some_and(|min| price < min) {
            return false;
        }
        if self.price_max.is_some_and(|max| price > max) {
            return false;
        }
        true
    }

    fn matches_brand(&self, product: &Product) -> bool {
        self.brands.is_empty()
            || self
                .brands
                .iter()
                .any(|b| b.eq_ignore_ascii_case(&product.brand))
    }

    fn matches_department(&self, product: &Product) -> bool {
        self.departments.is_empty()
            || self
                .departments
                .iter()
                .any(|d| d.eq_ignore_ascii_case(&product.department))
    }

    fn matches_color(&self, product: &Product) -> bool {
        self.colors.is_empty() || self.colors.iter().any(|c| product.has_color(c))
    }
}

/// Filter the catalog, preserving original relative order.
///
/// Returns references into `products`; the output is always an
/// order-preserving subsequence of the input. An empty result is a valid
/// outcome the caller must surface explicitly.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    criteria: &FilterCriteria,
    pricing: &PricingContext,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p, pricing))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::catalog::tests::{group, product};

    fn catalog() -> Vec<Product> {
        let mut top = product("Barco One Scrub Top", "BOT-001");
        top.retail_price = Decimal::new(3299, 2);
        top.contract_price = Decimal::new(2899, 2);

        let mut pants = product("Barco One Scrub Pants", "BOP-001");
        pants.retail_price = Decimal::new(2999, 2);
        pants.contract_price = Decimal::new(2599, 2);

        let mut coat = product("Grey's Anatomy Lab Coat", "GA-LC-001");
        coat.brand = "Grey's Anatomy".to_owned();
        coat.department = "Lab Coats".to_owned();
        coat.retail_price = Decimal::new(4999, 2);
        coat.contract_price = Decimal::new(4499, 2);
        coat.colors.retain(|c| c.name == "Navy");

        vec![top, pants, coat]
    }

    #[test]
    fn test_no_criteria_returns_everything_in_order() {
        let products = catalog();
        let out = filter_products(&products, &FilterCriteria::default(), &PricingContext::retail());

        let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Barco One Scrub Top",
                "Barco One Scrub Pants",
                "Grey's Anatomy Lab Coat"
            ]
        );
    }

    #[test]
    fn test_output_is_order_preserving_subsequence() {
        let products = catalog();
        let criteria = FilterCriteria {
            brands: vec!["Barco".to_owned()],
            ..FilterCriteria::default()
        };

        let out = filter_products(&products, &criteria, &PricingContext::retail());
        let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Barco One Scrub Top", "Barco One Scrub Pants"]);
    }

    #[test]
    fn test_keyword_matches_name_or_code() {
        let products = catalog();
        let pricing = PricingContext::retail();

        let by_name = FilterCriteria {
            keyword: Some("lab coat".to_owned()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_products(&products, &by_name, &pricing).len(), 1);

        let by_code = FilterCriteria {
            keyword: Some("bop".to_owned()),
            ..FilterCriteria::default()
        };
        let out = filter_products(&products, &by_code, &pricing);
        assert_eq!(out.len(), 1);
        assert_eq!(out.first().unwrap().code, "BOP-001");
    }

    #[test]
    fn test_blank_keyword_is_no_restriction() {
        let products = catalog();
        let criteria = FilterCriteria {
            keyword: Some("   ".to_owned()),
            ..FilterCriteria::default()
        };
        let out = filter_products(&products, &criteria, &PricingContext::retail());
        assert_eq!(out.len(), products.len());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let products = catalog();
        let criteria = FilterCriteria {
            price_min: Some(Decimal::new(2999, 2)),
            price_max: Some(Decimal::new(3299, 2)),
            ..FilterCriteria::default()
        };

        let out = filter_products(&products, &criteria, &PricingContext::retail());
        let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Barco One Scrub Top", "Barco One Scrub Pants"]);
    }

    #[test]
    fn test_point_price_range_matches_exact_price() {
        let products = catalog();
        let criteria = FilterCriteria {
            price_min: Some(Decimal::new(4999, 2)),
            price_max: Some(Decimal::new(4999, 2)),
            ..FilterCriteria::default()
        };

        let out = filter_products(&products, &criteria, &PricingContext::retail());
        assert_eq!(out.len(), 1);
        assert_eq!(out.first().unwrap().code, "GA-LC-001");
    }

    #[test]
    fn test_effective_price_switches_with_group() {
        let products = catalog();
        // $28.99 is the scrub top's contract price, below its $32.99 retail.
        let criteria = FilterCriteria {
            price_max: Some(Decimal::new(2899, 2)),
            ..FilterCriteria::default()
        };

        let retail = filter_products(&products, &criteria, &PricingContext::retail());
        assert!(retail.iter().all(|p| p.code != "BOT-001"));

        let contract = filter_products(
            &products,
            &criteria,
            &PricingContext::with_group(group("OhioHealth", "OHH", true)),
        );
        assert!(contract.iter().any(|p| p.code == "BOT-001"));
    }

    #[test]
    fn test_empty_selection_sets_exclude_nothing() {
        let products = catalog();
        let criteria = FilterCriteria {
            brands: Vec::new(),
            departments: Vec::new(),
            colors: Vec::new(),
            ..FilterCriteria::default()
        };
        let out = filter_products(&products, &criteria, &PricingContext::retail());
        assert_eq!(out.len(), products.len());
    }

    #[test]
    fn test_values_within_a_field_are_ored() {
        let products = catalog();
        let criteria = FilterCriteria {
            departments: vec!["Scrubs".to_owned(), "Lab Coats".to_owned()],
            ..FilterCriteria::default()
        };
        let out = filter_products(&products, &criteria, &PricingContext::retail());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_color_matches_any_variant_regardless_of_availability() {
        let products = catalog();
        // "Wine" exists only as an unavailable variant on the Barco products.
        let criteria = FilterCriteria {
            colors: vec!["Wine".to_owned()],
            ..FilterCriteria::default()
        };
        let out = filter_products(&products, &criteria, &PricingContext::retail());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_fields_are_anded() {
        let products = catalog();
        let criteria = FilterCriteria {
            keyword: Some("barco".to_owned()),
            departments: vec!["Lab Coats".to_owned()],
            ..FilterCriteria::default()
        };
        let out = filter_products(&products, &criteria, &PricingContext::retail());
        assert!(out.is_empty());
    }

    #[test]
    fn test_price_range_validity() {
        let mut criteria = FilterCriteria {
            price_min: Some(Decimal::new(10, 0)),
            price_max: Some(Decimal::new(5, 0)),
            ..FilterCriteria::default()
        };
        assert!(!criteria.has_valid_price_range());

        criteria.price_max = Some(Decimal::new(10, 0));
        assert!(criteria.has_valid_price_range());

        criteria.price_min = None;
        assert!(criteria.has_valid_price_range());
    }
}
