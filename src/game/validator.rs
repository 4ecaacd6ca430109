use crate::{game::Grid, models::Position};
use std::collections::HashSet;

pub struct PathValidator;

impl PathValidator {
    /// Validate that positions form a valid path on the grid
    pub fn is_valid_path(grid: &Grid, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that all positions are within bounds
        if !positions.iter().all(|pos| grid.contains(*pos)) {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !Self::are_adjacent(&window[0], &window[1]) {
                return false;
            }
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        unique_positions.len() == positions.len()
    }

    /// Check if two positions are adjacent (including diagonals)
    pub fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
        let row_diff = pos1.row.abs_diff(pos2.row);
        let col_diff = pos1.col.abs_diff(pos2.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }

    /// Extract the uppercased word spelled by grid positions.
    /// Out-of-range positions contribute nothing.
    pub fn extract_word(grid: &Grid, positions: &[Position]) -> String {
        positions
            .iter()
            .filter_map(|pos| grid.tile_at(*pos))
            .map(|tile| tile.normalized())
            .collect()
    }

    /// Whether the positions form a valid path spelling `word`, ignoring case
    pub fn spells(grid: &Grid, positions: &[Position], word: &str) -> bool {
        Self::is_valid_path(grid, positions)
            && Self::extract_word(grid, positions) == word.to_uppercase()
    }
}
