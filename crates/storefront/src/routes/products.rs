//! Product listing route handlers.
//!
//! The catalog endpoint applies the full filter set in one pass over the
//! cached product list and prices every product for the session's tier.

use axum::{Json, extract::Query, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use uniform_store_core::{
    FilterCriteria, Group, PricingContext, Product, ProductColor, filter_products,
};

use crate::error::{AppError, Result};
use crate::middleware::active_group;
use crate::services::catalog;
use crate::state::AppState;

/// Query parameters for the catalog listing.
///
/// Multi-value fields arrive as comma-separated lists, e.g.
/// `?brands=Barco,Carhartt&departments=Scrubs`.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub keyword: Option<String>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub brands: Option<String>,
    pub departments: Option<String>,
    pub colors: Option<String>,
}

impl CatalogQuery {
    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            keyword: self.keyword,
            price_min: self.price_min,
            price_max: self.price_max,
            brands: parse_csv(self.brands.as_deref()),
            departments: parse_csv(self.departments.as_deref()),
            colors: parse_csv(self.colors.as_deref()),
        }
    }
}

/// Split a comma-separated parameter, dropping blank segments.
fn parse_csv(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Product display data for API responses.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: String,
    pub code: String,
    pub name: String,
    pub brand: String,
    pub department: String,
    pub description: String,
    pub image_url: Option<String>,
    /// The price the current session pays.
    pub price: Decimal,
    pub retail_price: Decimal,
    pub colors: Vec<ProductColor>,
    pub sizes: Vec<String>,
    pub in_stock: bool,
    /// Whether this session's add-to-cart flow will ask about a logo.
    pub logo_offered: bool,
}

impl ProductView {
    fn from_product(product: &Product, pricing: &PricingContext) -> Self {
        Self {
            id: product.id.to_string(),
            code: product.code.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            department: product.department.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            price: pricing.effective_price(product),
            retail_price: product.retail_price,
            colors: product.colors.clone(),
            sizes: product.sizes.clone(),
            in_stock: product.in_stock,
            logo_offered: pricing.offers_logo_customization(product),
        }
    }
}

/// Group display data for API responses.
#[derive(Debug, Serialize)]
pub struct GroupView {
    pub code: String,
    pub name: String,
    pub description: String,
    pub logo_customization: bool,
}

impl From<&Group> for GroupView {
    fn from(group: &Group) -> Self {
        Self {
            code: group.code.clone(),
            name: group.name.clone(),
            description: group.description.clone(),
            logo_customization: group.logo_customization,
        }
    }
}

/// Catalog listing response.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<ProductView>,
    /// Total after filtering; zero is a valid result the client must show.
    pub count: usize,
    pub group: Option<GroupView>,
}

/// GET /products - filtered catalog listing.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<CatalogResponse>> {
    let criteria = query.into_criteria();
    if !criteria.has_valid_price_range() {
        return Err(AppError::BadRequest(
            "price_min must not exceed price_max".to_owned(),
        ));
    }

    let pricing = PricingContext::from_session(active_group(&session).await);
    let products = catalog::load_products(&state).await?;

    let matched = filter_products(&products, &criteria, &pricing);
    let views: Vec<ProductView> = matched
        .iter()
        .map(|p| ProductView::from_product(p, &pricing))
        .collect();

    Ok(Json(CatalogResponse {
        count: views.len(),
        group: pricing.group().map(GroupView::from),
        products: views,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_parsing_drops_blanks() {
        assert_eq!(
            parse_csv(Some("Barco, Carhartt ,,")),
            vec!["Barco".to_owned(), "Carhartt".to_owned()]
        );
        assert!(parse_csv(Some("")).is_empty());
        assert!(parse_csv(None).is_empty());
    }

    #[test]
    fn test_query_maps_to_criteria() {
        let query = CatalogQuery {
            keyword: Some("scrub".to_owned()),
            price_min: Some(Decimal::new(10, 0)),
            price_max: Some(Decimal::new(50, 0)),
            brands: Some("Barco".to_owned()),
            departments: None,
            colors: Some("Navy,Wine".to_owned()),
        };

        let criteria = query.into_criteria();
        assert_eq!(criteria.keyword.as_deref(), Some("scrub"));
        assert_eq!(criteria.brands, vec!["Barco".to_owned()]);
        assert!(criteria.departments.is_empty());
        assert_eq!(criteria.colors.len(), 2);
        assert!(criteria.has_valid_price_range());
    }

    #[test]
    fn test_inverted_price_range_is_invalid() {
        let query = CatalogQuery {
            price_min: Some(Decimal::new(50, 0)),
            price_max: Some(Decimal::new(10, 0)),
            ..CatalogQuery::default()
        };
        assert!(!query.into_criteria().has_valid_price_range());
    }
}
