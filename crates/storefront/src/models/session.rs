//! Session-backed storage.
//!
//! The session is the visitor's key-value store. The cart snapshot lives
//! under [`CART_SLOT_KEY`]; panel state and filter control values live under
//! their own keys.

use std::collections::HashMap;

use mini_store_core::{CART_SLOT_KEY, KeyValueSlot, ShopState};
use tower_sessions::Session;

use crate::error::Result;
use crate::models::FilterControls;

/// Session keys.
pub mod keys {
    /// Key for the serialized cart line items.
    pub use mini_store_core::CART_SLOT_KEY as CART;

    /// Key for the panel the shopper is looking at.
    pub const SHOP_STATE: &str = "shop_state";

    /// Key for the current filter control values.
    pub const FILTER_CONTROLS: &str = "filter_controls";
}

/// A [`KeyValueSlot`] over the session's cart snapshot.
///
/// Reads the session once up front; writes are buffered and written back by
/// [`SessionSlot::flush`].
#[derive(Debug, Default)]
pub struct SessionSlot {
    values: HashMap<String, String>,
    written: Vec<String>,
}

impl SessionSlot {
    /// Read the cart snapshot from `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn read(session: &Session) -> Result<Self> {
        let mut values = HashMap::new();
        if let Some(snapshot) = session.get::<String>(CART_SLOT_KEY).await? {
            values.insert(CART_SLOT_KEY.to_string(), snapshot);
        }
        Ok(Self {
            values,
            written: Vec::new(),
        })
    }

    /// Write every value set since [`SessionSlot::read`] back to `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn flush(self, session: &Session) -> Result<()> {
        let Self { mut values, written } = self;
        for key in written {
            if let Some(value) = values.remove(&key) {
                session.insert(&key, value).await?;
            }
        }
        Ok(())
    }
}

impl KeyValueSlot for SessionSlot {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        if !self.written.iter().any(|k| k == key) {
            self.written.push(key.to_string());
        }
        self.values.insert(key.to_string(), value);
    }
}

/// Load the panel state, defaulting to browsing.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn shop_state(session: &Session) -> Result<ShopState> {
    Ok(session
        .get::<ShopState>(keys::SHOP_STATE)
        .await?
        .unwrap_or_default())
}

/// Store the panel state.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn set_shop_state(session: &Session, state: ShopState) -> Result<()> {
    session.insert(keys::SHOP_STATE, state).await?;
    Ok(())
}

/// Load the filter control values, defaulting to no restriction.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn filter_controls(session: &Session) -> Result<FilterControls> {
    Ok(session
        .get::<FilterControls>(keys::FILTER_CONTROLS)
        .await?
        .unwrap_or_default())
}

/// Store the filter control values.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn set_filter_controls(session: &Session, controls: &FilterControls) -> Result<()> {
    session.insert(keys::FILTER_CONTROLS, controls).await?;
    Ok(())
}
