//! Seed the database with the demo catalog, groups, and retail records.
//!
//! The dataset mirrors the storefront demo content: three Ohio hospital
//! groups, a small uniform catalog, and two retail store customers with
//! order history. Rows that already exist are skipped, so the command is
//! safe to re-run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use uniform_store_core::{
    Group, GroupId, OrderSource, OrderStatus, Product, ProductColor, ProductId, RetailCustomer,
    RetailOrder,
};
use uniform_store_storefront::db::{
    self, GroupRepository, ProductRepository, RepositoryError, RetailRepository,
};

use super::database_url;

/// Seed the storefront database.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails, or
/// an insert fails for a reason other than the row already existing.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    info!("Connecting to storefront database...");
    let pool = db::create_pool(&database_url).await?;

    let groups = GroupRepository::new(&pool);
    for group in demo_groups() {
        match groups.insert(&group).await {
            Ok(()) => info!(code = %group.code, "seeded group"),
            Err(RepositoryError::Conflict(_)) => {
                warn!(code = %group.code, "group already exists, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let products = ProductRepository::new(&pool);
    for product in demo_products() {
        match products.insert(&product).await {
            Ok(()) => info!(code = %product.code, "seeded product"),
            Err(RepositoryError::Conflict(_)) => {
                warn!(code = %product.code, "product already exists, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let retail = RetailRepository::new(&pool);
    for customer in demo_retail_customers() {
        match retail.insert(&customer).await {
            Ok(()) => info!(account = %customer.account_number, "seeded retail customer"),
            Err(RepositoryError::Conflict(_)) => {
                warn!(
                    account = %customer.account_number,
                    "retail customer already exists, skipping"
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!("Seeding complete!");
    Ok(())
}

fn demo_groups() -> Vec<Group> {
    vec![
        Group {
            id: GroupId::random(),
            code: "OHH".to_owned(),
            name: "OhioHealth".to_owned(),
            description: "OhioHealth Organization".to_owned(),
            logo_customization: true,
            is_active: true,
        },
        Group {
            id: GroupId::random(),
            code: "MCH".to_owned(),
            name: "Mount Carmel Health".to_owned(),
            description: "Mount Carmel Health System".to_owned(),
            logo_customization: true,
            is_active: true,
        },
        Group {
            id: GroupId::random(),
            code: "NCH".to_owned(),
            name: "Nationwide Children's".to_owned(),
            description: "Nationwide Children's Hospital".to_owned(),
            logo_customization: false,
            is_active: true,
        },
    ]
}

fn color(name: &str, hex: &str) -> ProductColor {
    ProductColor {
        name: name.to_owned(),
        hex: hex.to_owned(),
        available: true,
    }
}

fn scrub_sizes() -> Vec<String> {
    ["XS", "S", "M", "L", "XL", "XXL"]
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

fn demo_products() -> Vec<Product> {
    let core_colors = vec![
        color("Navy", "#1e3a8a"),
        color("Royal Blue", "#2563eb"),
        color("Ceil Blue", "#7dd3fc"),
        color("Black", "#000000"),
        color("White", "#ffffff"),
    ];

    vec![
        Product {
            id: ProductId::random(),
            code: "BOT-001".to_owned(),
            name: "Barco One Scrub Top".to_owned(),
            brand: "Barco".to_owned(),
            department: "Scrubs".to_owned(),
            description: "Professional medical scrub top with modern fit".to_owned(),
            image_url: Some("/images/scrub-top-navy.jpg".to_owned()),
            retail_price: Decimal::new(3299, 2),
            contract_price: Decimal::new(2899, 2),
            colors: core_colors.clone(),
            sizes: scrub_sizes(),
            in_stock: true,
            logo_eligible: true,
        },
        Product {
            id: ProductId::random(),
            code: "BOP-001".to_owned(),
            name: "Barco One Scrub Pants".to_owned(),
            brand: "Barco".to_owned(),
            department: "Scrubs".to_owned(),
            description: "Comfortable medical scrub pants with multiple pockets".to_owned(),
            image_url: Some("/images/scrub-pants-navy.jpg".to_owned()),
            retail_price: Decimal::new(2999, 2),
            contract_price: Decimal::new(2599, 2),
            colors: core_colors,
            sizes: scrub_sizes(),
            in_stock: true,
            logo_eligible: true,
        },
        Product {
            id: ProductId::random(),
            code: "GA-LC-001".to_owned(),
            name: "Grey's Anatomy Lab Coat".to_owned(),
            brand: "Grey's Anatomy".to_owned(),
            department: "Lab Coats".to_owned(),
            description: "Professional lab coat with embroidered logo".to_owned(),
            image_url: Some("/images/lab-coat-white.jpg".to_owned()),
            retail_price: Decimal::new(4999, 2),
            contract_price: Decimal::new(4499, 2),
            colors: vec![color("White", "#ffffff"), color("Navy", "#1e3a8a")],
            sizes: scrub_sizes(),
            in_stock: true,
            logo_eligible: false,
        },
        Product {
            id: ProductId::random(),
            code: "CH-ST-001".to_owned(),
            name: "Carhartt Scrub Top".to_owned(),
            brand: "Carhartt".to_owned(),
            department: "Scrubs".to_owned(),
            description: "Durable medical scrub top built to last".to_owned(),
            image_url: Some("/images/carhartt-scrub-navy.jpg".to_owned()),
            retail_price: Decimal::new(2499, 2),
            contract_price: Decimal::new(2199, 2),
            colors: vec![
                color("Navy", "#1e3a8a"),
                color("Black", "#000000"),
                color("Wine", "#7f1d1d"),
            ],
            sizes: scrub_sizes(),
            in_stock: true,
            logo_eligible: true,
        },
    ]
}

fn demo_retail_customers() -> Vec<RetailCustomer> {
    vec![
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
                created_on: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
                source: OrderSource::Retail,
            }],
        },
        RetailCustomer {
            account_number: "R789012".to_owned(),
            phone: "6149876543".to_owned(),
            zip_code: "43201".to_owned(),
            first_name: "Michael".to_owned(),
            last_name: "Chen".to_owned(),
            orders: vec![RetailOrder {
                id: "R1002".to_owned(),
                subtotal: Decimal::new(12497, 2),
                tax: Decimal::new(998, 2),
                total: Decimal::new(13495, 2),
                status: OrderStatus::Delivered,
                created_on: NaiveDate::from_ymd_opt(2024, 2, 3).expect("valid date"),
                source: OrderSource::Retail,
            }],
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_is_consistent() {
        let groups = demo_groups();
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.is_active));

        let products = demo_products();
        assert_eq!(products.len(), 4);
        for p in &products {
            assert!(p.retail_price > p.contract_price);
            assert!(!p.colors.is_empty());
            assert!(!p.sizes.is_empty());
        }

        let customers = demo_retail_customers();
        assert_eq!(customers.len(), 2);
        let sarah = customers.first().unwrap();
        assert!(sarah.matches("(614) 123-4567", "43215", "R123456"));
    }
}
