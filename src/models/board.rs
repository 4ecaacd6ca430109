use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A single board tile. Compound tiles such as "Qu" or "St" are matched
/// as one unit, never letter by letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Tile text exactly as supplied
    text: String,
    /// Uppercased text used for matching
    normalized: String,
}

impl Tile {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let normalized = text.to_uppercase();
        Self { text, normalized }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_normalizes_case() {
        let tile = Tile::new("Qu");
        assert_eq!(tile.text(), "Qu");
        assert_eq!(tile.normalized(), "QU");
    }

    #[test]
    fn test_position_serializes_as_object() {
        let json = serde_json::to_string(&Position::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"row":1,"col":2}"#);
    }
}
