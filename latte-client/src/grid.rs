//! Grid placement resolver
//!
//! Maps linear block indices onto the fixed 5x7 page grid and resolves
//! which cells are already taken for a (category, page) pair.

use serde::{Deserialize, Serialize};
use shared::FilledPosition;

/// Rows per menu page
pub const GRID_ROWS: u32 = 5;
/// Columns per menu page
pub const GRID_COLUMNS: u32 = 7;
/// Cells per menu page
pub const PAGE_CELLS: u32 = GRID_ROWS * GRID_COLUMNS;

/// One cell on a menu page, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: u32,
    pub column: u32,
}

impl CellPosition {
    /// Resolve a linear block index in [0, PAGE_CELLS) to its cell
    pub fn from_index(index: u32) -> Self {
        debug_assert!(index < PAGE_CELLS);
        Self {
            row: index / GRID_COLUMNS + 1,
            column: index % GRID_COLUMNS + 1,
        }
    }

    /// All cells of one page, in block-index order
    pub fn page_cells() -> impl Iterator<Item = CellPosition> {
        (0..PAGE_CELLS).map(CellPosition::from_index)
    }
}

/// Render state of one editor grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Free and clickable
    Free,
    /// Taken by an existing menu; non-interactive
    Occupied,
    /// The form's currently chosen position
    Chosen,
}

/// One cell plus its render state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub position: CellPosition,
    pub state: CellState,
}

/// Whether (category, page, cell) is already taken by an existing menu
pub fn is_occupied(
    filled: &[FilledPosition],
    category_id: i64,
    page: u32,
    cell: CellPosition,
) -> bool {
    filled.iter().any(|position| {
        position.menu_category_id == category_id
            && position.menu_page == page
            && position.menu_row == cell.row
            && position.menu_column == cell.column
    })
}

/// Render states for all 35 cells of (category, page)
///
/// At most one cell is [`CellState::Chosen`]; an occupied cell stays
/// occupied even if it matches `chosen`.
pub fn cell_states(
    filled: &[FilledPosition],
    category_id: i64,
    page: u32,
    chosen: Option<CellPosition>,
) -> Vec<CellView> {
    CellPosition::page_cells()
        .map(|position| {
            let state = if is_occupied(filled, category_id, page, position) {
                CellState::Occupied
            } else if chosen == Some(position) {
                CellState::Chosen
            } else {
                CellState::Free
            };
            CellView { position, state }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn filled(category_id: i64, page: u32, row: u32, column: u32) -> FilledPosition {
        FilledPosition {
            menu_category_id: category_id,
            menu_page: page,
            menu_row: row,
            menu_column: column,
        }
    }

    #[test]
    fn index_zero_is_top_left() {
        assert_eq!(CellPosition::from_index(0), CellPosition { row: 1, column: 1 });
        assert_eq!(CellPosition::from_index(7), CellPosition { row: 2, column: 1 });
        assert_eq!(
            CellPosition::from_index(PAGE_CELLS - 1),
            CellPosition { row: 5, column: 7 }
        );
    }

    #[test]
    fn index_mapping_is_a_bijection_onto_the_grid() {
        let cells: HashSet<CellPosition> = CellPosition::page_cells().collect();

        assert_eq!(cells.len(), PAGE_CELLS as usize);
        for cell in &cells {
            assert!((1..=GRID_ROWS).contains(&cell.row));
            assert!((1..=GRID_COLUMNS).contains(&cell.column));
        }
    }

    #[test]
    fn occupancy_matches_category_and_page_exactly() {
        let positions = vec![
            filled(2, 1, 1, 1),
            filled(2, 2, 1, 1),
            filled(3, 1, 1, 2),
        ];
        let cell = CellPosition { row: 1, column: 1 };

        assert!(is_occupied(&positions, 2, 1, cell));
        // Same cell, other page or category
        assert!(!is_occupied(&positions, 2, 3, cell));
        assert!(!is_occupied(&positions, 3, 1, cell));
        // Other cell on a matching page
        assert!(!is_occupied(&positions, 2, 1, CellPosition { row: 5, column: 7 }));
    }

    #[test]
    fn cell_states_cover_the_whole_page() {
        let positions = vec![filled(2, 1, 1, 1)];
        let chosen = CellPosition { row: 2, column: 3 };
        let views = cell_states(&positions, 2, 1, Some(chosen));

        assert_eq!(views.len(), PAGE_CELLS as usize);
        assert_eq!(views[0].state, CellState::Occupied);
        assert_eq!(
            views.iter().filter(|v| v.state == CellState::Chosen).count(),
            1
        );
        assert_eq!(
            views.iter().find(|v| v.state == CellState::Chosen).unwrap().position,
            chosen
        );
    }

    #[test]
    fn occupied_wins_over_chosen() {
        let cell = CellPosition { row: 1, column: 1 };
        let positions = vec![filled(2, 1, 1, 1)];
        let views = cell_states(&positions, 2, 1, Some(cell));

        assert_eq!(views[0].state, CellState::Occupied);
        assert!(views.iter().all(|v| v.state != CellState::Chosen));
    }
}
