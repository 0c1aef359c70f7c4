//! Products domain module.
//!
//! This crate contains the product model (generic, electronic and perishable
//! items) and its flat record form, implemented purely as deterministic
//! domain logic (no IO, no storage).

pub mod product;
pub mod record;

pub use product::{Product, ProductKind};
pub use record::{ProductRecord, TYPE_ELECTRONIC, TYPE_PERISHABLE};
