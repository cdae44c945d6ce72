//! Latte Client - menu editing and ordering state for the POS front-end
//!
//! Provides the HTTP calls to the menu API plus the client-side state
//! the UI binds to: grid placement resolution, the menu editor form,
//! the paginated menu panel with its cart, and the injectable store.

pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod http;
pub mod panel;
pub mod store;

pub use config::ClientConfig;
pub use editor::{FormMode, MenuEditorForm, NameCheck, SubmitOutcome};
pub use error::{ClientError, ClientResult};
pub use grid::{CellPosition, CellState, CellView, GRID_COLUMNS, GRID_ROWS, PAGE_CELLS};
pub use http::{HttpClient, MenuApi};
pub use panel::MenuPanel;
pub use store::MenuStore;

// Re-export shared types for convenience
pub use shared::{
    AllMenuInfo, CartSummary, ColorScheme, FilledPosition, Menu, MenuCategory, MenuCreate,
    OrderLine, OrderOption,
};
