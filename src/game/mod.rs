//! Core Connect Four game logic: board and win detection, players, column
//! selection, and the game session that ties them together.

mod board;
pub mod input;
mod player;
mod state;

pub use board::{Board, Cell, Move, COLS, ROWS, WIN_LENGTH};
pub use input::{ColumnRejection, ColumnSource};
pub use player::{Player, PlayerId};
pub use state::{GameSession, GameStatus};
