//! Cart entry construction and validation.
//!
//! A cart entry snapshots the effective price at the time of the add; it is
//! never recomputed or mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::pricing::{AddToCartFlow, PricingContext};
use crate::types::ProductId;

/// Errors from validating an add-to-cart request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CartError {
    /// Quantity must be at least 1.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// The requested color is not offered for this product.
    #[error("color '{0}' is not offered for this product")]
    UnknownColor(String),

    /// The requested size is not offered for this product.
    #[error("size '{0}' is not offered for this product")]
    UnknownSize(String),

    /// The product has no color or size variants to default to.
    #[error("product has no {0} variants")]
    NoVariants(&'static str),

    /// Logo customization must be answered before the entry is committed.
    #[error("a logo customization choice is required for this product")]
    LogoChoiceRequired,
}

/// What the shopper asked for. Unset color/size fall back to the product's
/// first variant, matching the storefront's quick-add behavior.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartSelection {
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity: Option<u32>,
    pub logo_customization: Option<bool>,
}

/// A validated cart entry ready to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEntry {
    pub product_id: ProductId,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    pub logo_customization: bool,
    /// Effective price at the time of the add; never recomputed.
    pub price: Decimal,
}

impl CartEntry {
    /// Build a cart entry from a shopper's selection.
    ///
    /// Validates quantity and variant membership, resolves defaults, enforces
    /// the logo customization handshake, and snapshots the effective price
    /// from the pricing context.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when the quantity is zero, a requested variant
    /// does not belong to the product, or a logo choice is required but
    /// missing.
    pub fn build(
        product: &Product,
        selection: CartSelection,
        pricing: &PricingContext,
    ) -> Result<Self, CartError> {
        let quantity = selection.quantity.unwrap_or(1);
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let color = match selection.color {
            Some(color) => {
                if !product.has_color(&color) {
                    return Err(CartError::UnknownColor(color));
                }
                color
            }
            None => product
                .colors
                .first()
                .map(|c| c.name.clone())
                .ok_or(CartError::NoVariants("color"))?,
        };

        let size = match selection.size {
            Some(size) => {
                if !product.has_size(&size) {
                    return Err(CartError::UnknownSize(size));
                }
                size
            }
            None => product
                .sizes
                .first()
                .cloned()
                .ok_or(CartError::NoVariants("size"))?,
        };

        let logo_customization = match pricing.add_to_cart_flow(product) {
            AddToCartFlow::PromptForLogo => selection
                .logo_customization
                .ok_or(CartError::LogoChoiceRequired)?,
            AddToCartFlow::Direct => false,
        };

        Ok(Self {
            product_id: product.id,
            color,
            size,
            quantity,
            logo_customization,
            price: pricing.effective_price(product),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::tests::{group, product};

    #[test]
    fn test_defaults_to_first_color_and_size() {
        let p = product("Scrub Top", "BOT-001");
        let entry = CartEntry::build(&p, CartSelection::default(), &PricingContext::retail())
            .unwrap();

        assert_eq!(entry.color, "Navy");
        assert_eq!(entry.size, "S");
        assert_eq!(entry.quantity, 1);
        assert!(!entry.logo_customization);
        assert_eq!(entry.price, p.retail_price);
    }

    #[test]
    fn test_rejects_zero_quantity() {
        let p = product("Scrub Top", "BOT-001");
        let selection = CartSelection {
            quantity: Some(0),
            ..CartSelection::default()
        };
        assert!(matches!(
            CartEntry::build(&p, selection, &PricingContext::retail()),
            Err(CartError::ZeroQuantity)
        ));
    }

    #[test]
    fn test_rejects_variant_not_on_product() {
        let p = product("Scrub Top", "BOT-001");

        let bad_color = CartSelection {
            color: Some("Chartreuse".to_owned()),
            ..CartSelection::default()
        };
        assert!(matches!(
            CartEntry::build(&p, bad_color, &PricingContext::retail()),
            Err(CartError::UnknownColor(_))
        ));

        let bad_size = CartSelection {
            size: Some("5XL".to_owned()),
            ..CartSelection::default()
        };
        assert!(matches!(
            CartEntry::build(&p, bad_size, &PricingContext::retail()),
            Err(CartError::UnknownSize(_))
        ));
    }

    #[test]
    fn test_logo_choice_required_under_eligible_group() {
        let p = product("Scrub Top", "BOT-001"); // logo_eligible
        let ctx = PricingContext::with_group(group("OhioHealth", "OHH", true));

        assert!(matches!(
            CartEntry::build(&p, CartSelection::default(), &ctx),
            Err(CartError::LogoChoiceRequired)
        ));

        let with_choice = CartSelection {
            logo_customization: Some(true),
            ..CartSelection::default()
        };
        let entry = CartEntry::build(&p, with_choice, &ctx).unwrap();
        assert!(entry.logo_customization);
        assert_eq!(entry.price, p.contract_price);
    }

    #[test]
    fn test_no_prompt_without_group_or_eligibility() {
        let p = product("Scrub Top", "BOT-001");

        // No group: committed immediately, flag forced off.
        let selection = CartSelection {
            logo_customization: Some(true),
            ..CartSelection::default()
        };
        let entry = CartEntry::build(&p, selection, &PricingContext::retail()).unwrap();
        assert!(!entry.logo_customization);

        // Group without the permission: same.
        let ctx = PricingContext::with_group(group("Nationwide Children's", "NCH", false));
        let entry = CartEntry::build(&p, CartSelection::default(), &ctx).unwrap();
        assert!(!entry.logo_customization);
        assert_eq!(entry.price, p.contract_price);
    }
}
