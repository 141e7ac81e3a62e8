use super::PlayerId;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned tokens needed to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

/// Coordinate of a placed token. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub column: usize,
    pub row: usize,
}

impl Move {
    pub fn new(column: usize, row: usize) -> Self {
        Move { column, row }
    }

    /// Step by a signed offset, staying on the board.
    fn offset(self, d_col: isize, d_row: isize) -> Option<Move> {
        let column = self.column.checked_add_signed(d_col)?;
        let row = self.row.checked_add_signed(d_row)?;
        (column < COLS && row < ROWS).then_some(Move { column, row })
    }
}

/// Forward step of a scan, as (column delta, row delta).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Direction {
    d_col: isize,
    d_row: isize,
    rewind: bool,
}

const HORIZONTAL: Direction = Direction {
    d_col: 1,
    d_row: 0,
    rewind: true,
};
// The anchor is always the topmost token in its column, so a vertical run can
// only continue downward.
const VERTICAL: Direction = Direction {
    d_col: 0,
    d_row: 1,
    rewind: false,
};
const DIAGONAL_UP: Direction = Direction {
    d_col: 1,
    d_row: -1,
    rewind: true,
};
const DIAGONAL_DOWN: Direction = Direction {
    d_col: 1,
    d_row: 1,
    rewind: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[row][column]
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        self.cells[0][column] != Cell::Empty
    }

    /// Drop a token in a column and return where it landed.
    pub fn drop_token(&mut self, column: usize, player: PlayerId) -> Result<Move, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }

        // Lowest empty row; gravity keeps every empty cell above the occupied ones.
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][column] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(column))?;

        self.cells[row][column] = Cell::Occupied(player);
        Ok(Move { column, row })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    #[cfg(test)]
    pub(crate) fn token_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if the token at `anchor` completes four in a row for `player`
    pub fn check_win(&self, anchor: Move, player: PlayerId) -> bool {
        self.horizontal_win(anchor, player)
            || self.vertical_win(anchor, player)
            || self.diagonal_up_win(anchor, player)
            || self.diagonal_down_win(anchor, player)
    }

    pub fn horizontal_win(&self, anchor: Move, player: PlayerId) -> bool {
        self.scan(anchor, player, HORIZONTAL)
    }

    pub fn vertical_win(&self, anchor: Move, player: PlayerId) -> bool {
        self.scan(anchor, player, VERTICAL)
    }

    /// Diagonal rising left to right (/)
    pub fn diagonal_up_win(&self, anchor: Move, player: PlayerId) -> bool {
        self.scan(anchor, player, DIAGONAL_UP)
    }

    /// Diagonal falling left to right (\)
    pub fn diagonal_down_win(&self, anchor: Move, player: PlayerId) -> bool {
        self.scan(anchor, player, DIAGONAL_DOWN)
    }

    fn scan(&self, anchor: Move, player: PlayerId, dir: Direction) -> bool {
        let token = Cell::Occupied(player);
        let span = (WIN_LENGTH - 1) as isize;

        // Walk back to the first token of the run. Bounds are checked before
        // the cell is read.
        let mut start = anchor;
        if dir.rewind {
            for _ in 1..WIN_LENGTH {
                match start.offset(-dir.d_col, -dir.d_row) {
                    Some(prev) if self.get(prev.column, prev.row) == token => start = prev,
                    _ => break,
                }
            }
        }

        if start.offset(dir.d_col * span, dir.d_row * span).is_none() {
            return false;
        }

        (1..=span).all(|step| {
            start
                .offset(dir.d_col * step, dir.d_row * step)
                .is_some_and(|cell| self.get(cell.column, cell.row) == token)
        })
    }

    /// Build a board from six row strings, top row first. `1` and `2` are
    /// player tokens, anything else is empty.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; ROWS]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (column, ch) in line.chars().take(COLS).enumerate() {
                board.cells[row][column] = match ch {
                    '1' => Cell::Occupied(PlayerId::One),
                    '2' => Cell::Occupied(PlayerId::Two),
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
