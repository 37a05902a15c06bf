//! The shopping cart.
//!
//! A [`CartStore`] owns the cart's line items together with the slot they
//! are persisted to. The slot is read once when the store is opened, and
//! every mutation writes the full line item list back as a JSON array.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::slot::{CART_SLOT_KEY, KeyValueSlot};
use crate::types::{Price, ProductId};

/// One cart entry aggregating all units of a single product.
///
/// The product's fields are copied in, so a persisted cart keeps its names
/// and prices even if the catalog changes underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Aggregate quantity and price of a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub quantity: u32,
    pub price: Price,
}

/// Serialize line items to the snapshot format.
#[must_use]
pub fn encode_snapshot(items: &[CartLineItem]) -> String {
    // Plain structs of strings and integers always serialize.
    serde_json::to_string(items).unwrap_or_default()
}

/// Parse line items from the snapshot format.
///
/// # Errors
///
/// Returns an error if `snapshot` is not a JSON array of line items.
pub fn decode_snapshot(snapshot: &str) -> Result<Vec<CartLineItem>, serde_json::Error> {
    serde_json::from_str(snapshot)
}

/// Cart line items bound to the slot they persist to.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<CartLineItem>,
    slot: S,
}

impl<S: KeyValueSlot> CartStore<S> {
    /// Open the cart persisted in `slot`.
    ///
    /// An absent or unreadable snapshot yields an empty cart.
    pub fn open(slot: S) -> Self {
        let items = slot
            .get(CART_SLOT_KEY)
            .and_then(|snapshot| decode_snapshot(&snapshot).ok())
            .unwrap_or_default();
        Self { items, slot }
    }

    /// Add one unit of `id` to the cart.
    ///
    /// Increments the existing line item or appends a new one with quantity 1,
    /// then persists. Returns the updated line item, or `None` (without
    /// touching the slot) if the catalog has no such product.
    pub fn add_item(&mut self, catalog: &Catalog, id: ProductId) -> Option<&CartLineItem> {
        let product = catalog.find(id)?;

        let index = if let Some(index) = self.position(id) {
            if let Some(line) = self.items.get_mut(index) {
                line.quantity = line.quantity.saturating_add(1);
            }
            index
        } else {
            self.items.push(CartLineItem {
                product: product.clone(),
                quantity: 1,
            });
            self.items.len() - 1
        };

        self.persist();
        self.items.get(index)
    }

    /// Remove the whole line item for `id`, regardless of its quantity.
    ///
    /// Persists even when nothing was removed. Returns whether a line existed.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.id() != id);
        self.persist();
        self.items.len() != before
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Total quantity and total price.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            quantity: self.items.iter().map(|line| line.quantity).sum(),
            price: self.items.iter().map(CartLineItem::line_price).sum(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Give back the slot, e.g. to flush it to its backing store.
    pub fn into_slot(self) -> S {
        self.slot
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|line| line.id() == id)
    }

    fn persist(&mut self) {
        self.slot.set(CART_SLOT_KEY, encode_snapshot(&self.items));
    }
}
