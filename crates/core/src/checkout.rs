//! Panel state machine.
//!
//! ```text
//! Browsing --open_cart--> CartOpen --checkout--> CheckoutComplete
//!    ^                       |                        |
//!    +-------close_cart------+                        |
//!    +-------------start_new_shopping-----------------+
//! ```
//!
//! Transitions requested from a state where they don't apply leave the state
//! unchanged. Checkout on an empty cart fails with [`EmptyCartError`] from
//! every state and never changes it.

use serde::{Deserialize, Serialize};

use crate::cart::{CartStore, CartTotals};
use crate::error::EmptyCartError;
use crate::slot::KeyValueSlot;

/// Which panel the shopper is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ShopState {
    /// Catalog and filters visible.
    #[default]
    Browsing,
    /// Cart summary visible, catalog hidden.
    CartOpen,
    /// Order confirmation visible with the totals of the completed checkout.
    CheckoutComplete { totals: CartTotals },
}

impl ShopState {
    /// `Browsing -> CartOpen`. Returns whether the state changed.
    pub fn open_cart(&mut self) -> bool {
        self.transition(Self::Browsing, Self::CartOpen)
    }

    /// `CartOpen -> Browsing`. Returns whether the state changed.
    pub fn close_cart(&mut self) -> bool {
        self.transition(Self::CartOpen, Self::Browsing)
    }

    /// `CheckoutComplete -> Browsing`. Returns whether the state changed.
    pub fn start_new_shopping(&mut self) -> bool {
        if matches!(self, Self::CheckoutComplete { .. }) {
            *self = Self::Browsing;
            true
        } else {
            false
        }
    }

    /// Complete the order held in `cart`.
    ///
    /// From `CartOpen`, computes the final totals, clears and persists the
    /// cart, and moves to `CheckoutComplete`. From any other state a
    /// non-empty cart is left alone and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCartError` if the cart has no line items; the state is
    /// left as it was.
    pub fn checkout<S: KeyValueSlot>(
        &mut self,
        cart: &mut CartStore<S>,
    ) -> Result<Option<CartTotals>, EmptyCartError> {
        if cart.is_empty() {
            return Err(EmptyCartError);
        }
        if *self != Self::CartOpen {
            return Ok(None);
        }

        let totals = cart.totals();
        cart.clear();
        *self = Self::CheckoutComplete { totals };
        Ok(Some(totals))
    }

    /// Whether the catalog and filter controls are shown.
    #[must_use]
    pub const fn shows_catalog(&self) -> bool {
        matches!(self, Self::Browsing)
    }

    fn transition(&mut self, from: Self, to: Self) -> bool {
        if *self == from {
            *self = to;
            true
        } else {
            false
        }
    }
}
