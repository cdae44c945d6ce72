//! Menu block model

use serde::{Deserialize, Serialize};

use super::ColorScheme;

/// Menu entity as returned by the backend
///
/// Prices are non-negative integer won. Placement is 1-based:
/// `menu_row` in [1,5], `menu_column` in [1,7].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub menu_id: i64,
    pub menu_category_id: i64,
    pub menu_name: String,
    pub menu_price: i64,
    /// Stored as "T"/"F" on the wire
    #[serde(rename = "menu_isFavorite", with = "favorite_flag")]
    pub menu_is_favorite: bool,
    #[serde(rename = "menu_colorScheme")]
    pub menu_color_scheme: Option<ColorScheme>,
    pub menu_page: u32,
    pub menu_row: u32,
    pub menu_column: u32,
}

/// `registerMenu` request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreate {
    pub menu_category_id: i64,
    pub menu_name: String,
    pub menu_price: i64,
    #[serde(rename = "menu_isFavorite", with = "favorite_flag")]
    pub menu_is_favorite: bool,
    #[serde(rename = "menu_colorScheme")]
    pub menu_color_scheme: Option<ColorScheme>,
    pub menu_page: u32,
    pub menu_row: u32,
    pub menu_column: u32,
}

/// Option category reference data (e.g. "Shots", "Temperature")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCategory {
    pub option_category_id: i64,
    pub option_category_name: String,
}

/// Orderable option within an option category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionInfo {
    pub option_id: i64,
    pub option_category_id: i64,
    pub option_name: String,
    /// Signed price delta per unit
    pub option_price: i64,
}

/// Menu joined with category and option data for panel display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllMenuInfo {
    pub menu_id: i64,
    pub menu_category_id: i64,
    pub menu_category_name: String,
    pub menu_name: String,
    pub menu_price: i64,
    #[serde(rename = "menu_isFavorite", with = "favorite_flag")]
    pub menu_is_favorite: bool,
    #[serde(rename = "menu_colorScheme")]
    pub menu_color_scheme: Option<ColorScheme>,
    pub menu_page: u32,
    pub menu_row: u32,
    pub menu_column: u32,
    #[serde(default)]
    pub option_categories: Vec<OptionCategory>,
    #[serde(default)]
    pub options: Vec<OptionInfo>,
}

/// Serde codec for the legacy "T"/"F" favorite column
mod favorite_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "T" } else { "F" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw == "T")
    }
}
