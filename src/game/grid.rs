use rand::Rng;

use crate::{
    game::GridError,
    models::{Position, Tile},
    utils::letters::{get_cumulative_distribution, tile_text},
};

/// Offsets to the eight surrounding cells, clockwise from north-west.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Rectangular board of tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows of tile text.
    ///
    /// Every row must have the same length as the first and every tile must
    /// carry some text. `[]` and `[[]]` are both valid, empty boards.
    pub fn new<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut tiles = Vec::with_capacity(rows.len() * cols);

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            for (col, text) in cells.iter().enumerate() {
                let text = text.as_ref();
                if text.is_empty() {
                    return Err(GridError::EmptyTile { row, col });
                }
                tiles.push(Tile::new(text));
            }
        }

        // A board whose rows are all empty has no cells at all
        let rows = if cols == 0 { 0 } else { rows.len() };

        Ok(Self { tiles, rows, cols })
    }

    /// Row and column counts
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of cells on the board
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.index_of(pos).map(|idx| &self.tiles[idx])
    }

    /// Row-major index of an in-bounds position
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    /// In-bounds cells adjacent to `pos`, diagonals included.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            let next = Position { row, col };
            self.contains(next).then_some(next)
        })
    }

    /// Every cell on the board in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position { row, col }))
    }

    /// Tile text as nested rows, as originally supplied
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.tiles
            .chunks(self.cols)
            .map(|row| row.iter().map(|tile| tile.text().to_string()).collect())
            .collect()
    }
}

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a new board with weighted letter distribution
    pub fn generate(rows: usize, cols: usize) -> Grid {
        let mut rng = rand::rng();
        Self::generate_with(rows, cols, &mut rng)
    }

    pub fn generate_with(rows: usize, cols: usize, rng: &mut impl Rng) -> Grid {
        let cumulative_dist = get_cumulative_distribution();
        let total = cumulative_dist.last().map_or(0.0, |(_, c)| *c);

        let mut grid = Vec::with_capacity(rows);

        for _ in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for _ in 0..cols {
                let letter = Self::random_letter(&cumulative_dist, total, rng);
                row.push(tile_text(letter));
            }
            grid.push(row);
        }

        let tiles = grid.into_iter().flatten().map(Tile::new).collect();
        Grid {
            tiles,
            rows: if cols == 0 { 0 } else { rows },
            cols: if rows == 0 { 0 } else { cols },
        }
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'E' // Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn grid(rows: &[&str]) -> Grid {
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.chars().map(|c| c.to_string()).collect())
            .collect();
        Grid::new(&rows).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let g = grid(&["ABC", "DEF"]);
        assert_eq!(g.dimensions(), (2, 3));
        assert_eq!(g.len(), 6);
        assert!(!g.is_empty());
    }

    #[test]
    fn test_empty_grids() {
        let none: Vec<Vec<String>> = vec![];
        let blank: Vec<Vec<String>> = vec![vec![]];
        assert!(Grid::new(&none).unwrap().is_empty());
        let g = Grid::new(&blank).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.dimensions(), (0, 0));
        assert_eq!(g.positions().count(), 0);
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let rows = vec![vec!["A", "B"], vec!["C"]];
        assert_eq!(
            Grid::new(&rows),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_empty_tile_rejected() {
        let rows = vec![vec!["A", ""]];
        assert_eq!(Grid::new(&rows), Err(GridError::EmptyTile { row: 0, col: 1 }));
    }

    #[test]
    fn test_tile_at() {
        let g = grid(&["AB", "CD"]);
        assert_eq!(g.tile_at(Position::new(1, 0)).unwrap().text(), "C");
        assert!(g.tile_at(Position::new(2, 0)).is_none());
        assert!(g.tile_at(Position::new(0, 2)).is_none());
    }

    #[test]
    fn test_corner_has_three_neighbors() {
        let g = grid(&["ABC", "DEF", "GHI"]);
        let mut neighbors: Vec<_> = g.neighbors(Position::new(0, 0)).collect();
        neighbors.sort_by_key(|p| (p.row, p.col));
        assert_eq!(
            neighbors,
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_center_has_eight_neighbors() {
        let g = grid(&["ABC", "DEF", "GHI"]);
        let center = Position::new(1, 1);
        let neighbors: Vec<_> = g.neighbors(center).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
    }

    #[test]
    fn test_neighbors_are_deterministic() {
        let g = grid(&["ABC", "DEF", "GHI"]);
        let first: Vec<_> = g.neighbors(Position::new(1, 2)).collect();
        let second: Vec<_> = g.neighbors(Position::new(1, 2)).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_to_rows_keeps_original_text() {
        let rows = vec![vec!["Qu", "a"], vec!["St", "B"]];
        assert_eq!(Grid::new(&rows).unwrap().to_rows(), rows);
    }

    #[test]
    fn test_grid_generation() {
        let grid = GridGenerator::generate(5, 5);
        assert_eq!(grid.dimensions(), (5, 5));
        assert!(grid.to_rows().iter().all(|row| row.len() == 5));
    }

    #[test]
    fn test_generated_q_is_compound() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridGenerator::generate_with(12, 12, &mut rng);
        for pos in grid.positions() {
            let text = grid.tile_at(pos).unwrap().normalized();
            assert!(text == "QU" || (text.len() == 1 && text != "Q"));
        }
    }
}
