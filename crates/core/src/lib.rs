//! Mini Store Core - Domain layer for the storefront.
//!
//! This crate holds everything the storefront knows about products and carts:
//! - [`catalog`] - The immutable product list loaded once at startup
//! - [`filter`] - Search, category and price-bucket filtering
//! - [`cart`] - Cart line items persisted to a key-value slot
//! - [`checkout`] - The browsing / cart / confirmation state machine
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! templates. Persistence goes through the [`KeyValueSlot`] trait so the same
//! cart logic runs against a browser session, a test double, or anything else
//! that can store one string under one key.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod filter;
pub mod slot;
pub mod types;

pub use cart::{CartLineItem, CartStore, CartTotals};
pub use catalog::{Catalog, Product};
pub use checkout::ShopState;
pub use error::{EmptyCartError, LoadError};
pub use filter::{CategoryFilter, FilterCriteria, PRICE_BUCKETS, PriceBucket, PriceFilter};
pub use slot::{CART_SLOT_KEY, KeyValueSlot, MemorySlot};
pub use types::*;
