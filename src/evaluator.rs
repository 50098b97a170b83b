//! Static scoring of positions at the search horizon

use crate::{
    board::{Board, Cell, Player, Window, WINDOWS},
    config::Weights,
    Score, CENTER_COLUMN, HEIGHT,
};

/// Scores `board` from the point of view of `player`
///
/// Every alignment window is scored by how many tiles each side has in it, and each of
/// `player`'s tiles in the center column earns a bonus, as central tiles take part in the
/// most alignments. Both players are scored by the same rules.
pub fn evaluate_position(board: &Board, player: Player, weights: &Weights) -> Score {
    let own = Cell::from(player);
    let opponent = Cell::from(player.other());

    let center_count = (0..HEIGHT)
        .filter(|&row| board.cell(row, CENTER_COLUMN) == own)
        .count() as Score;
    let mut score = center_count * weights.center;

    for window in WINDOWS.iter() {
        score += score_window(board, window, own, opponent, weights);
    }
    score
}

fn score_window(board: &Board, window: &Window, own: Cell, opponent: Cell, weights: &Weights) -> Score {
    let (mut own_count, mut opponent_count, mut empty_count) = (0, 0, 0);
    for &(row, column) in window.iter() {
        match board.cell(row, column) {
            c if c == own => own_count += 1,
            c if c == opponent => opponent_count += 1,
            _ => empty_count += 1,
        }
    }

    let mut score = match (own_count, empty_count) {
        (4, _) => weights.four,
        (3, 1) => weights.three,
        (2, 2) => weights.two,
        _ => 0,
    };
    if opponent_count == 3 && empty_count == 1 {
        score += weights.opponent_three;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_alignment_scores_four_weight() {
        let board = Board::from_diagram(
            "
            .......
            .......
            .......
            .......
            .......
            1111...
            ",
        )
        .unwrap();
        // 100 for the four, 5 + 2 for the overlapping windows, 3 for the center tile
        assert_eq!(evaluate_position(&board, Player::One, &Weights::default()), 110);
    }

    #[test]
    fn open_opponent_three_is_penalised() {
        let board = Board::from_diagram(
            "
            .......
            .......
            .......
            .......
            .......
            111....
            ",
        )
        .unwrap();
        assert_eq!(evaluate_position(&board, Player::Two, &Weights::default()), -4);
    }

    #[test]
    fn zero_weights_score_nothing() {
        let weights = Weights {
            center: 0,
            four: 0,
            three: 0,
            two: 0,
            opponent_three: 0,
        };
        let board = Board::from_moves("4455").unwrap();
        assert_eq!(evaluate_position(&board, Player::One, &weights), 0);
        assert_eq!(evaluate_position(&board, Player::Two, &weights), 0);
    }
}
