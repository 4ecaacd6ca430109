use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::{
    game::{Grid, GridError},
    models::Position,
};

/// Shortest word, in characters, the solver will look for
pub const MIN_WORD_LENGTH: usize = 3;

/// Cells visited between deadline checks inside a single search
const DEADLINE_CHECK_INTERVAL: u32 = 1024;

/// Knobs for a solver run
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Stop searching once this instant has passed
    pub deadline: Option<Instant>,
    /// Keep one realizing path for every matched word
    pub collect_paths: bool,
}

/// Outcome of [`Solver::solve`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    /// Matched words, spelled as in the input, in input order
    pub words: Vec<String>,
    /// One path per matched word, present only when requested
    pub paths: Option<HashMap<String, Vec<Position>>>,
    /// False when the deadline cut the search short
    pub complete: bool,
}

/// Finds words that can be traced across a board.
///
/// Each word is matched tile by tile: the tile under the current cell must
/// be a prefix of what is left of the word, so a "QU" tile consumes two
/// letters at once and can never be split. Cells are used at most once per
/// word.
pub struct Solver<'g> {
    grid: &'g Grid,
    options: SolveOptions,
}

/// Per-word search scratch space, reused across words
struct SearchState {
    visited: Vec<bool>,
    path: Vec<Position>,
    /// Cells entered since the last deadline check
    steps: u32,
    /// Set once the deadline has passed; every pending branch then fails
    expired: bool,
}

impl SearchState {
    fn new(cells: usize) -> Self {
        Self {
            visited: vec![false; cells],
            path: Vec::new(),
            steps: 0,
            expired: false,
        }
    }
}

impl<'g> Solver<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self::with_options(grid, SolveOptions::default())
    }

    pub fn with_options(grid: &'g Grid, options: SolveOptions) -> Self {
        Self { grid, options }
    }

    /// Words from `words` that appear on the board, de-duplicated ignoring case
    pub fn find_all_solutions<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        self.solve(words).words
    }

    /// Whether a single word can be traced on the board
    pub fn contains(&self, word: &str) -> bool {
        self.find_path(word).is_some()
    }

    /// One path spelling `word`, if any exists.
    ///
    /// Words shorter than [`MIN_WORD_LENGTH`] are never searched.
    pub fn find_path(&self, word: &str) -> Option<Vec<Position>> {
        if !Self::is_eligible(word) {
            return None;
        }
        let mut state = SearchState::new(self.grid.len());
        self.trace(word.to_uppercase().as_bytes(), &mut state)
            .then_some(state.path)
    }

    pub fn solve<S: AsRef<str>>(&self, words: &[S]) -> Solution {
        let mut solution = Solution {
            words: Vec::new(),
            paths: self.options.collect_paths.then(HashMap::new),
            complete: true,
        };

        if self.grid.is_empty() {
            tracing::debug!("Empty board, skipping {} candidate words", words.len());
            return solution;
        }

        let mut seen = HashSet::new();
        let candidates: Vec<(&str, String)> = words
            .iter()
            .map(S::as_ref)
            .filter(|word| Self::is_eligible(word))
            .filter_map(|word| {
                let normalized = word.to_uppercase();
                seen.insert(normalized.clone()).then_some((word, normalized))
            })
            .collect();

        tracing::debug!(
            "Searching {} of {} candidate words on a {:?} board",
            candidates.len(),
            words.len(),
            self.grid.dimensions()
        );

        let mut state = SearchState::new(self.grid.len());

        for (word, normalized) in candidates {
            if self.deadline_passed() {
                solution.complete = false;
                break;
            }

            state.path.clear();
            if !self.trace(normalized.as_bytes(), &mut state) {
                if state.expired {
                    solution.complete = false;
                    break;
                }
                continue;
            }

            if let Some(paths) = solution.paths.as_mut() {
                paths.insert(word.to_string(), state.path.clone());
            }
            solution.words.push(word.to_string());
        }

        if !solution.complete {
            tracing::warn!(
                "Deadline reached, returning {} words found so far",
                solution.words.len()
            );
        }
        tracing::debug!("Found {} words", solution.words.len());

        solution
    }

    /// Length filter, counted in characters before any case folding
    fn is_eligible(word: &str) -> bool {
        word.chars().count() >= MIN_WORD_LENGTH
    }

    fn deadline_passed(&self) -> bool {
        self.options
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Try every starting cell until one traces the whole word
    fn trace(&self, word: &[u8], state: &mut SearchState) -> bool {
        for start in self.grid.positions() {
            if state.expired || self.deadline_passed() {
                state.expired = true;
                return false;
            }
            if self.extend(word, 0, start, state) {
                return true;
            }
        }
        false
    }

    /// Match the tile at `pos` against `word[offset..]` and keep going from
    /// its neighbors. On success `state.path` holds the full path.
    fn extend(&self, word: &[u8], offset: usize, pos: Position, state: &mut SearchState) -> bool {
        if state.expired {
            return false;
        }
        state.steps += 1;
        if state.steps >= DEADLINE_CHECK_INTERVAL {
            state.steps = 0;
            if self.deadline_passed() {
                state.expired = true;
                return false;
            }
        }

        let Some(idx) = self.grid.index_of(pos) else {
            return false;
        };
        if state.visited[idx] {
            return false;
        }
        let Some(tile) = self.grid.tile_at(pos) else {
            return false;
        };

        let tile = tile.normalized().as_bytes();
        let end = offset + tile.len();
        if end > word.len() || &word[offset..end] != tile {
            return false;
        }

        state.path.push(pos);
        if end == word.len() {
            return true;
        }

        state.visited[idx] = true;
        let found = self
            .grid
            .neighbors(pos)
            .any(|next| self.extend(word, end, next, state));
        state.visited[idx] = false;

        if !found {
            state.path.pop();
        }
        found
    }
}

/// Find every word in `words` that can be traced on the board described by
/// `grid`, one entry per word regardless of how many paths spell it.
pub fn find_all_solutions<S, W>(grid: &[Vec<S>], words: &[W]) -> Result<Vec<String>, GridError>
where
    S: AsRef<str>,
    W: AsRef<str>,
{
    let grid = Grid::new(grid)?;
    Ok(Solver::new(&grid).find_all_solutions(words))
}
