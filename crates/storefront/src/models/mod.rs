//! Per-visitor data kept in the session.

pub mod controls;
pub mod session;

pub use controls::FilterControls;
pub use session::{SessionSlot, keys};
