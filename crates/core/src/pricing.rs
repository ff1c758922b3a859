//! Pricing and authorization context derived from session state.
//!
//! A session is either anonymous/individual (retail pricing) or carries an
//! active [`Group`] (contract pricing, possibly with logo customization).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Group, Product};

/// Which price field applies to the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceTier {
    /// No group active; retail price applies.
    Retail,
    /// An active group contract; contract price applies.
    Contract,
}

/// What the add-to-cart flow must do for a given product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddToCartFlow {
    /// Commit the entry directly at the effective price.
    Direct,
    /// The shopper must first answer yes/no to logo customization.
    PromptForLogo,
}

/// Session pricing context.
///
/// Owns the active group (if any) and answers every pricing and
/// logo-eligibility question, so callers never inspect the group directly.
#[derive(Debug, Clone, Default)]
pub struct PricingContext {
    group: Option<Group>,
}

impl PricingContext {
    /// Context for an individual shopper (retail pricing).
    #[must_use]
    pub const fn retail() -> Self {
        Self { group: None }
    }

    /// Context for a session with an active group contract.
    #[must_use]
    pub const fn with_group(group: Group) -> Self {
        Self { group: Some(group) }
    }

    /// Build from an optional session group.
    #[must_use]
    pub const fn from_session(group: Option<Group>) -> Self {
        Self { group }
    }

    /// The active group, if any.
    #[must_use]
    pub const fn group(&self) -> Option<&Group> {
        self.group.as_ref()
    }

    /// The price tier in effect.
    #[must_use]
    pub const fn tier(&self) -> PriceTier {
        if self.group.is_some() {
            PriceTier::Contract
        } else {
            PriceTier::Retail
        }
    }

    /// The price a shopper in this context pays for a product.
    #[must_use]
    pub fn effective_price(&self, product: &Product) -> Decimal {
        match self.tier() {
            PriceTier::Retail => product.retail_price,
            PriceTier::Contract => product.contract_price,
        }
    }

    /// Whether logo customization is on offer for this product.
    ///
    /// Requires both an active group with the customization permission and a
    /// logo-eligible product.
    #[must_use]
    pub fn offers_logo_customization(&self, product: &Product) -> bool {
        product.logo_eligible
            && self
                .group
                .as_ref()
                .is_some_and(|g| g.logo_customization)
    }

    /// How the add-to-cart flow must proceed for this product.
    #[must_use]
    pub fn add_to_cart_flow(&self, product: &Product) -> AddToCartFlow {
        if self.offers_logo_customization(product) {
            AddToCartFlow::PromptForLogo
        } else {
            AddToCartFlow::Direct
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::tests::{group, product};

    #[test]
    fn test_retail_tier_without_group() {
        let ctx = PricingContext::retail();
        let p = product("Scrub Top", "BOT-001");

        assert_eq!(ctx.tier(), PriceTier::Retail);
        assert_eq!(ctx.effective_price(&p), p.retail_price);
    }

    #[test]
    fn test_contract_tier_with_group() {
        let ctx = PricingContext::with_group(group("OhioHealth", "OHH", true));
        let p = product("Scrub Top", "BOT-001");

        assert_eq!(ctx.tier(), PriceTier::Contract);
        assert_eq!(ctx.effective_price(&p), p.contract_price);
    }

    #[test]
    fn test_logo_prompt_requires_group_permission_and_eligibility() {
        let p = product("Scrub Top", "BOT-001"); // logo_eligible = true
        let mut ineligible = product("Lab Coat", "GA-LC-001");
        ineligible.logo_eligible = false;

        // Group with customization + eligible product -> prompt
        let ctx = PricingContext::with_group(group("OhioHealth", "OHH", true));
        assert_eq!(ctx.add_to_cart_flow(&p), AddToCartFlow::PromptForLogo);

        // Group with customization + ineligible product -> direct
        assert_eq!(ctx.add_to_cart_flow(&ineligible), AddToCartFlow::Direct);

        // Group without customization -> direct
        let ctx = PricingContext::with_group(group("Nationwide Children's", "NCH", false));
        assert_eq!(ctx.add_to_cart_flow(&p), AddToCartFlow::Direct);

        // No group -> direct
        let ctx = PricingContext::retail();
        assert_eq!(ctx.add_to_cart_flow(&p), AddToCartFlow::Direct);
    }
}
