//! Domain errors.
//!
//! Only two things can go wrong in the store: the catalog can't be loaded,
//! or a checkout is attempted on an empty cart. Everything else (unknown
//! product ids, removing a line that isn't there) is a silent no-op.

use thiserror::Error;

/// The product catalog could not be retrieved or parsed.
///
/// Not recoverable for the lifetime of the process: the catalog stays empty
/// and there is no retry.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog source could not be read.
    #[error("failed to fetch catalog: {0}")]
    Fetch(String),

    /// The catalog source was read but is not a valid product list.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Checkout was attempted with no line items in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Your cart is empty. Please add items before checking out.")]
pub struct EmptyCartError;
