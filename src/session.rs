use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{
    apply_move,
    board::{Board, Cell, GameState, Player},
    HEIGHT, WIDTH,
};

/// A game between a human and the AI
pub struct Session {
    pub board: Board,
    pub human: Player,
    pub game: String,
    pub state: GameState,
}

impl Session {
    pub fn new(human: Player) -> Self {
        Self {
            board: Board::new(),
            human,
            game: String::new(),
            state: GameState::Playing,
        }
    }

    pub fn ai(&self) -> Player {
        self.human.other()
    }

    pub fn to_move(&self) -> Player {
        self.board.next_player()
    }

    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        let player = self.to_move();
        if !apply_move(&mut self.board, column, player) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }
        self.game.push_str(&column_one_indexed.to_string());
        self.state = self.board.state();

        Ok(self.state)
    }

    /// Colour of a cell as written in the board's diagram
    fn tile_color(c: char) -> Color {
        match c {
            '1' => Color::Red,
            '2' => Color::Yellow,
            _ => Color::DarkBlue,
        }
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        // the diagram lists the top row first, one character per cell
        for line in self.board.to_string().lines() {
            for c in line.chars() {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(Self::tile_color(c)),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_checked_alternates_players() -> Result<()> {
        let mut session = Session::new(Player::One);
        assert_eq!(session.ai(), Player::Two);

        assert_eq!(session.play_checked(4)?, GameState::Playing);
        assert_eq!(session.to_move(), Player::Two);
        session.play_checked(4)?;
        assert_eq!(session.board.cell(1, 3), Cell::PlayerTwo);
        assert_eq!(session.game, "44");
        Ok(())
    }

    #[test]
    fn play_checked_rejects_bad_columns() -> Result<()> {
        let mut session = Session::new(Player::Two);
        assert!(session.play_checked(0).is_err());
        assert!(session.play_checked(WIDTH + 1).is_err());

        for _ in 0..HEIGHT {
            session.play_checked(1)?;
        }
        assert!(session.play_checked(1).is_err());
        assert_eq!(session.game.len(), HEIGHT);
        Ok(())
    }

    #[test]
    fn play_checked_reports_wins() -> Result<()> {
        let mut session = Session::new(Player::One);
        for &column in [1, 2, 1, 2, 1, 2].iter() {
            session.play_checked(column)?;
        }
        assert_eq!(session.play_checked(1)?, GameState::PlayerOneWin);
        Ok(())
    }

    #[test]
    fn tile_colors_follow_the_diagram() -> Result<()> {
        let mut session = Session::new(Player::One);
        session.play_checked(1)?;
        session.play_checked(2)?;

        let diagram = session.board.to_string();
        let bottom = diagram.lines().last().unwrap_or_default();
        let colors: Vec<Color> = bottom.chars().map(Session::tile_color).collect();
        assert_eq!(colors.len(), WIDTH);
        assert_eq!(colors[0], Color::Red);
        assert_eq!(colors[1], Color::Yellow);
        assert!(colors[2..].iter().all(|&c| c == Color::DarkBlue));
        Ok(())
    }
}
