//! Tool groups.
//!
//! Each file defines one group: its parameter types, its static catalog and
//! the handler that turns a call into a single upstream request.

pub mod categories;
pub mod common;
pub mod hiscore;
pub mod item;
pub mod player;
pub mod price;
pub mod wiki;

pub use item::ItemTools;
pub use player::{GameMode, PlayerTools};
pub use price::PriceTools;
pub use wiki::WikiTools;
