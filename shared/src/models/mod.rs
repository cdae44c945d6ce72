//! Domain models
//!
//! Plain value records exchanged with the menu API and held in the
//! client-side store.

mod category;
mod color;
mod menu;
mod position;

pub use category::{MenuCategory, RESERVED_CATEGORY_ID};
pub use color::ColorScheme;
pub use menu::{AllMenuInfo, Menu, MenuCreate, OptionCategory, OptionInfo};
pub use position::FilledPosition;
