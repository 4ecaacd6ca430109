pub mod board;

pub use board::{Position, Tile};
