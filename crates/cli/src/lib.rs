//! Interactive text menu over an `Inventory`.

pub mod config;
pub mod menu;

pub use config::Config;
pub use menu::Menu;
