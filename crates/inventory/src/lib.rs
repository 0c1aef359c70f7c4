//! Inventory store module.
//!
//! Holds the ordered list of products for one backing JSON file and keeps the
//! file in sync with memory: every mutation rewrites the whole file.

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{Inventory, LoadOutcome};
