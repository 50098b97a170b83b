//! A depth-limited minimax agent for Connect 4

use log::debug;

use crate::{
    board::Board,
    config::Config,
    evaluator::evaluate_position,
    Score, INFINITY,
};

/// An agent choosing moves by minimax search with alpha-beta pruning
///
/// # Notes
/// The search explores every move sequence up to a fixed depth, playing and undoing
/// moves on a single working board. Columns are tried from left to right and only a
/// strictly better score replaces the current best, so ties go to the lowest column.
///
/// # Position Scoring
/// A position won by the maximizing player scores `INFINITY`, one won by the minimizing
/// player `-INFINITY`, and a full board 0. Positions at the search horizon are scored by
/// [`evaluate_position`] from the maximizing player's point of view.
pub struct Engine<'a> {
    config: &'a Config,

    /// The number of nodes searched by this `Engine` so far (for diagnostics only)
    pub node_count: usize,
}

impl<'a> Engine<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            node_count: 0,
        }
    }

    /// Whether either player has won or no tile can be dropped
    pub fn is_game_over(&self, board: &Board) -> bool {
        board.check_win(self.config.maximizer)
            || board.check_win(self.config.maximizer.other())
            || board.is_full()
    }

    /// Performs game tree search
    ///
    /// Returns the best column for the side to move, if any, and its backed-up score
    /// (see [Position Scoring]). Every move played on `board` is undone before returning.
    ///
    /// [Position Scoring]: #position-scoring
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Option<usize>, Score) {
        self.node_count += 1;

        let maximizer = self.config.maximizer;
        let minimizer = maximizer.other();

        // terminal positions come before the depth check
        if board.check_win(maximizer) {
            return (None, INFINITY);
        }
        if board.check_win(minimizer) {
            return (None, -INFINITY);
        }
        let mut valid_locations = board.valid_locations();
        let first = match valid_locations.next() {
            Some(column) => column,
            // draw
            None => return (None, 0),
        };

        if depth == 0 {
            return (None, evaluate_position(board, maximizer, &self.config.weights));
        }

        let (player, mut best_score) = if maximizing {
            (maximizer, -INFINITY)
        } else {
            (minimizer, INFINITY)
        };
        let mut best_column = first;

        for column in std::iter::once(first).chain(valid_locations) {
            // valid locations always have an open row
            let row = if let Some(row) = board.next_open_row(column) {
                row
            } else {
                break;
            };

            board.drop_piece(row, column, player);
            let (_, score) = self.minimax(board, depth - 1, !maximizing, alpha, beta);
            board.clear_cell(row, column);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_column = column;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = column;
                }
                beta = beta.min(best_score);
            }

            // the other player will never allow this line, stop exploring it
            if alpha >= beta {
                break;
            }
        }

        (Some(best_column), best_score)
    }

    /// Searches `depth` moves ahead for the maximizing player
    ///
    /// The search runs on a copy of `board`, which is left untouched.
    pub fn search(&mut self, board: &Board, depth: usize) -> (Option<usize>, Score) {
        self.node_count = 0;

        let mut working = *board;
        let (column, score) = self.minimax(&mut working, depth, true, -INFINITY, INFINITY);

        debug!(
            "depth {} search for player {}: column {:?}, score {}, {} nodes",
            depth, self.config.maximizer, column, score, self.node_count
        );
        (column, score)
    }
}
