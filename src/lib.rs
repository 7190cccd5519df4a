//! Tick-driven snake game core with a macroquad host.

pub mod audio;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod host;
pub mod input;
pub mod render;
pub mod snake;
pub mod timer;

pub use error::{Result, SnakeError};
pub use game::{GameLoop, GameState};
pub use grid::{Board, Direction, Position};
pub use input::Action;
