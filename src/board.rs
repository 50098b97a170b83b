use anyhow::{anyhow, Result};

use std::fmt;

use crate::{CONNECT, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The player owning this cell, if any
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

/// One of the two sides, player one moves first
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "1"),
            Player::Two => write!(f, "2"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// A run of `CONNECT` cells as `(row, column)` pairs
pub type Window = [(usize, usize); CONNECT];

/// The number of distinct alignments on the board
pub const NUM_WINDOWS: usize = HEIGHT * (WIDTH - CONNECT + 1)
    + WIDTH * (HEIGHT - CONNECT + 1)
    + 2 * (HEIGHT - CONNECT + 1) * (WIDTH - CONNECT + 1);

/// Every horizontal, vertical and diagonal alignment on the board, each listed once
pub const WINDOWS: [Window; NUM_WINDOWS] = windows();

const fn windows() -> [Window; NUM_WINDOWS] {
    // (row step, column step) for horizontal, vertical, diagonal / and diagonal \
    const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];
    let span = CONNECT as isize - 1;

    let mut windows = [[(0, 0); CONNECT]; NUM_WINDOWS];
    let mut n = 0;
    let mut d = 0;
    while d < 4 {
        let (dy, dx) = DIRECTIONS[d];
        let mut row = 0;
        while row < HEIGHT as isize {
            let mut column = 0;
            while column < WIDTH as isize {
                let end_row = row + dy * span;
                let end_column = column + dx * span;
                // only keep windows that end on the board
                if end_row >= 0 && end_row < HEIGHT as isize && end_column < WIDTH as isize {
                    let mut i = 0;
                    while i < CONNECT {
                        windows[n][i] = (
                            (row + dy * i as isize) as usize,
                            (column + dx * i as isize) as usize,
                        );
                        i += 1;
                    }
                    n += 1;
                }
                column += 1;
            }
            row += 1;
        }
        d += 1;
    }
    windows
}

/// Snapshot of the playable columns of a board, in ascending order
///
/// The snapshot does not borrow the board, so the board can be played on while iterating.
#[derive(Copy, Clone, Debug)]
pub struct ValidLocations {
    columns: [usize; WIDTH],
    size: usize,
    next: usize,
}

impl Iterator for ValidLocations {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.size {
            self.next += 1;
            Some(self.columns[self.next - 1])
        } else {
            None
        }
    }
}

/// The game grid
///
/// Rows are indexed from the bottom, so tiles fill each column from row 0 upwards.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT], // cells are stored bottom-to-top, left-to-right
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Plays a sequence of one-indexed columns, alternating players starting with player one
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let column = column - 1;
                    // abort if the position is won at any point
                    if board.state() != GameState::Playing {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    let row = board
                        .next_open_row(column)
                        .ok_or_else(|| anyhow!("Invalid move, column {} full", column + 1))?;
                    board.drop_piece(row, column, player);
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Reads a board drawn top row first, one line per row
    ///
    /// `1` and `2` are tiles of each player, `.` or `0` an empty cell. Blank lines and
    /// whitespace inside a line are ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self> {
        let lines: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != HEIGHT {
            return Err(anyhow!(
                "expected {} rows in board diagram, found {}",
                HEIGHT,
                lines.len()
            ));
        }

        let mut board = Self::new();
        for (line_idx, line) in lines.iter().enumerate() {
            if line.len() != WIDTH {
                return Err(anyhow!(
                    "expected {} columns in row {} of board diagram, found {}",
                    WIDTH,
                    line_idx + 1,
                    line.len()
                ));
            }
            let row = HEIGHT - 1 - line_idx;
            for (column, &c) in line.iter().enumerate() {
                board.cells[row][column] = match c {
                    '.' | '0' => Cell::Empty,
                    '1' => Cell::PlayerOne,
                    '2' => Cell::PlayerTwo,
                    _ => return Err(anyhow!("could not parse '{}' as a board cell", c)),
                };
            }
        }

        // tiles can't float above an empty cell
        for column in 0..WIDTH {
            if let Some(open_row) = board.next_open_row(column) {
                if (open_row..HEIGHT).any(|row| !board.cells[row][column].is_empty()) {
                    return Err(anyhow!("floating tile in column {}", column + 1));
                }
            }
        }
        Ok(board)
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Whether a tile can be dropped into `column`
    pub fn is_valid_location(&self, column: usize) -> bool {
        column < WIDTH && self.cells[HEIGHT - 1][column].is_empty()
    }

    /// The lowest empty row of `column`, or `None` if the column is full
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).find(|&row| self.cells[row][column].is_empty())
    }

    /// Places a tile without checking the move, `row` must be the next open row of `column`
    pub fn drop_piece(&mut self, row: usize, column: usize, player: Player) {
        self.cells[row][column] = player.into();
    }

    /// Removes the tile at `row`, `column`
    pub fn clear_cell(&mut self, row: usize, column: usize) {
        self.cells[row][column] = Cell::Empty;
    }

    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; WIDTH]; HEIGHT];
    }

    pub fn valid_locations(&self) -> ValidLocations {
        let mut locations = ValidLocations {
            columns: [0; WIDTH],
            size: 0,
            next: 0,
        };
        for column in (0..WIDTH).filter(|&column| self.is_valid_location(column)) {
            locations.columns[locations.size] = column;
            locations.size += 1;
        }
        locations
    }

    /// Whether `player` has `CONNECT` tiles aligned anywhere on the board
    pub fn check_win(&self, player: Player) -> bool {
        let cell = Cell::from(player);
        WINDOWS
            .iter()
            .any(|window| window.iter().all(|&(row, column)| self.cells[row][column] == cell))
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.is_valid_location(column))
    }

    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// The player to move, assuming player one started
    pub fn next_player(&self) -> Player {
        if self.count(Player::One) > self.count(Player::Two) {
            Player::Two
        } else {
            Player::One
        }
    }

    pub fn state(&self) -> GameState {
        if self.check_win(Player::One) {
            GameState::PlayerOneWin
        } else if self.check_win(Player::Two) {
            GameState::PlayerTwoWin
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for column in 0..WIDTH {
                let c = match self.cells[row][column].player() {
                    Some(player) => player.to_string(),
                    None => ".".to_string(),
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
