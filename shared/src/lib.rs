//! Shared types for the Latte POS front-end
//!
//! Domain models and order types used across the client crates:
//! menu blocks, categories, color themes, grid placements, and
//! cart order lines with their derived totals.

pub mod models;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AllMenuInfo, ColorScheme, FilledPosition, Menu, MenuCategory, MenuCreate, OptionCategory,
    OptionInfo, RESERVED_CATEGORY_ID,
};
pub use order::{CartSummary, OrderLine, OrderOption};
