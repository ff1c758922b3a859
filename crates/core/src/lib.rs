//! Uniform Store Core - Shared domain types and catalog logic.
//!
//! This crate provides the domain model used across the Uniform Store
//! components:
//! - `storefront` - Public-facing catalog and cart service
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. Everything that talks to the outside world lives
//! in the storefront crate; everything here can be unit tested directly.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and emails
//! - [`catalog`] - Products, color variants, and organizational groups
//! - [`pricing`] - Retail vs. contract pricing and logo customization rules
//! - [`filter`] - The multi-predicate catalog filter engine
//! - [`cart`] - Cart entry construction and validation
//! - [`retail`] - Retail store customer records and order history
//! - [`link`] - The retail account linking state machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod link;
pub mod pricing;
pub mod retail;
pub mod types;

pub use cart::{CartEntry, CartError, CartSelection};
pub use catalog::{Group, Product, ProductColor, find_group};
pub use filter::{FilterCriteria, filter_products};
pub use link::{LinkError, LinkEvent, LinkState, LinkedIdentity};
pub use pricing::{AddToCartFlow, PriceTier, PricingContext};
pub use retail::{OrderSource, OrderStatus, RetailCustomer, RetailOrder, normalize_phone};
pub use types::*;
