mod grid;
mod player;

pub use grid::{GridError, GridMap};
pub use player::Player;
