//! Synchronous key-value persistence.
//!
//! The cart is persisted as one serialized string under one fixed key. The
//! slot is read once when a [`CartStore`](crate::CartStore) is opened and
//! overwritten wholesale after every mutation.

use std::collections::HashMap;

/// Key the cart snapshot is stored under.
pub const CART_SLOT_KEY: &str = "miniStoreCart";

/// A synchronous string key-value store.
pub trait KeyValueSlot {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: String);
}

/// In-memory slot, mostly for tests and tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySlot {
    values: HashMap<String, String>,
}

impl MemorySlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot holding one value.
    #[must_use]
    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let mut slot = Self::new();
        slot.set(key, value.into());
        slot
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

impl<S: KeyValueSlot + ?Sized> KeyValueSlot for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value);
    }
}
