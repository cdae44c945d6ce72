//! Menu editor form state
//!
//! Collects category, name, price, color theme and grid placement,
//! checks the name against the backend, and submits the create
//! request. Validation results are explicit values carrying their
//! user-facing message; nothing is rendered from here.

use crate::grid::{self, CellPosition, CellView};
use crate::http::MenuApi;
use crate::store::MenuStore;
use crate::ClientResult;
use shared::{ColorScheme, FilledPosition, Menu, MenuCreate};

/// Editor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

/// Result of the menu-name duplicate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCheck {
    /// Trimmed name was empty; blocks submission without a request
    NotEntered,
    /// A menu with the same name already exists
    Duplicate,
    /// Name is free to use
    Available,
}

impl NameCheck {
    /// Inline message shown under the name input
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotEntered => "Menu name has not been entered.",
            Self::Duplicate => "A menu with the same name already exists.",
            Self::Available => "This menu name is available.",
        }
    }

    /// Whether this result blocks submission
    pub fn blocks_submit(&self) -> bool {
        !matches!(self, Self::Available)
    }
}

/// Outcome of a form submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Menu registered and appended to the store; close the form
    Created(Menu),
    /// Name check blocked submission; form stays open
    Blocked(NameCheck),
    /// Edit-mode submission is an incomplete upstream feature
    EditNotSupported,
}

/// Stateful menu editor form
#[derive(Debug, Clone, Default)]
pub struct MenuEditorForm {
    mode: FormMode,
    /// Selected category id; 0 = none selected
    pub category_id: i64,
    pub name: String,
    /// Price in won
    pub price: i64,
    pub color: Option<ColorScheme>,
    page_input: String,
    chosen: Option<CellPosition>,
    name_check: Option<NameCheck>,
}

impl MenuEditorForm {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Select a category; the placement view snaps back to page 1
    pub fn select_category(&mut self, category_id: i64) {
        self.category_id = category_id;
        self.page_input = "1".to_string();
    }

    /// Raw page input as typed
    pub fn page_input(&self) -> &str {
        &self.page_input
    }

    /// Change the page whose free cells are shown
    pub fn set_page_input(&mut self, input: impl Into<String>) {
        self.page_input = input.into();
    }

    /// Page number the input resolves to; empty or non-numeric input
    /// yields 0, which matches no placement
    pub fn page_number(&self) -> u32 {
        self.page_input.trim().parse().unwrap_or(0)
    }

    pub fn chosen_position(&self) -> Option<CellPosition> {
        self.chosen
    }

    /// Choose a placement cell; occupied cells are non-interactive
    pub fn choose_position(&mut self, filled: &[FilledPosition], cell: CellPosition) {
        if grid::is_occupied(filled, self.category_id, self.page_number(), cell) {
            return;
        }
        self.chosen = Some(cell);
    }

    /// Render states for the 35 placement cells of the current
    /// (category, page)
    pub fn cell_views(&self, filled: &[FilledPosition]) -> Vec<CellView> {
        grid::cell_states(filled, self.category_id, self.page_number(), self.chosen)
    }

    /// Last name-check result, if any
    pub fn name_check(&self) -> Option<NameCheck> {
        self.name_check
    }

    /// Run the duplicate-name check and remember the result
    ///
    /// An empty trimmed name blocks without touching the network.
    pub async fn check_name<A: MenuApi + ?Sized>(&mut self, api: &A) -> ClientResult<NameCheck> {
        let trimmed = self.name.trim();

        let check = if trimmed.is_empty() {
            NameCheck::NotEntered
        } else if api.check_same_menu_name(trimmed).await? {
            NameCheck::Duplicate
        } else {
            NameCheck::Available
        };

        self.name_check = Some(check);
        Ok(check)
    }

    /// The register payload the form would submit right now
    pub fn create_payload(&self) -> MenuCreate {
        let position = self.chosen.unwrap_or(CellPosition { row: 0, column: 0 });
        MenuCreate {
            menu_category_id: self.category_id,
            menu_name: self.name.clone(),
            menu_price: self.price,
            menu_is_favorite: false,
            menu_color_scheme: self.color,
            menu_page: self.page_number(),
            menu_row: position.row,
            menu_column: position.column,
        }
    }

    /// Submit the form
    ///
    /// Create mode: name check first; a blocking result leaves the form
    /// open. On success the created menu is appended to the store.
    /// Edit mode is an incomplete upstream feature and never submits.
    pub async fn submit<A: MenuApi + ?Sized>(
        &mut self,
        api: &A,
        store: &mut MenuStore,
    ) -> ClientResult<SubmitOutcome> {
        match self.mode {
            FormMode::Edit => {
                tracing::warn!("edit-mode submission is not implemented");
                Ok(SubmitOutcome::EditNotSupported)
            }
            FormMode::Create => {
                let check = self.check_name(api).await?;
                if check.blocks_submit() {
                    return Ok(SubmitOutcome::Blocked(check));
                }

                let created = api.register_menu(&self.create_payload()).await?;
                tracing::debug!(menu_id = created.menu_id, "menu added");
                store.append_menu(created.clone());
                Ok(SubmitOutcome::Created(created))
            }
        }
    }

    /// Restore all fields to their defaults (create mode only)
    pub fn reset(&mut self) {
        if self.mode != FormMode::Create {
            return;
        }
        *self = Self::new(FormMode::Create);
    }
}
