//! A depth-limited agent for playing the board game 'Connect 4'
//!
//! This agent uses a minimax game tree search with alpha-beta pruning,
//! scoring positions at the search horizon with a positional heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{apply_move, evaluate_move, board::{Board, Player}, config::Config};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let config = Config::new();
//! let mut board = Board::from_moves("121212")?;
//!
//! let column = evaluate_move(&board, 1, &config);
//! assert_eq!(column, Some(1));
//!
//! assert!(apply_move(&mut board, 1, Player::Two));
//! assert!(board.check_win(Player::Two));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod config;

pub mod evaluator;

pub mod engine;


use board::{Board, Player};
use config::Config;
use engine::Engine;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const CONNECT: usize = 4;

/// The column whose tiles take part in the most alignments
pub const CENTER_COLUMN: usize = WIDTH / 2;

/// Position scores are exact integers
pub type Score = i32;

/// Score of a position won by the maximizing player, `-INFINITY` for the minimizing player.
/// No heuristic score comes close to either bound.
pub const INFINITY: Score = i32::MAX;

// at least one alignment must fit in each direction
const_assert!(WIDTH >= CONNECT);
const_assert!(HEIGHT >= CONNECT);

/// Chooses the column the AI plays on `board`, searching `depth` moves ahead
///
/// Returns `None` when no move can be played: the board is full, or the game is already over.
/// A `depth` of 0 is searched as 1 so that a move is always produced.
pub fn evaluate_move(board: &Board, depth: usize, config: &Config) -> Option<usize> {
    let mut engine = Engine::new(config);
    let (column, _score) = engine.search(board, depth.max(1));
    column
}

/// Drops a tile for `player` into `column`, returning false if the column is full or out of range
pub fn apply_move(board: &mut Board, column: usize, player: Player) -> bool {
    if !board.is_valid_location(column) {
        return false;
    }
    match board.next_open_row(column) {
        Some(row) => {
            board.drop_piece(row, column, player);
            true
        }
        None => false,
    }
}
