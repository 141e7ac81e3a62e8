use super::board::{Board, Move};
use super::input::{self, ColumnSource};
use super::{Player, PlayerId};
use crate::error::{InputError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won(PlayerId),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// One game: the board, both players, whose turn it is and whether it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    current: PlayerId,
    status: GameStatus,
}

impl GameSession {
    /// Start a game on an empty board with player one to move
    pub fn new(player_one: Player, player_two: Player) -> Self {
        GameSession {
            board: Board::new(),
            players: [player_one, player_two],
            current: PlayerId::One,
            status: GameStatus::Ongoing,
        }
    }

    /// Same players, fresh board
    pub fn restart(&self) -> Self {
        let [one, two] = self.players.clone();
        GameSession::new(one, two)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_id(&self) -> PlayerId {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.board.is_column_full(column)
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Ask `source` for a column until it names one on the board that is not full
    pub fn choose_column<S: ColumnSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<usize, InputError> {
        input::choose_column(&self.board, source)
    }

    /// Place the current player's token in `column`.
    ///
    /// The column must be on the board and not full; callers are expected to
    /// check with [`GameSession::is_column_full`] or go through
    /// [`GameSession::choose_column`] first.
    pub fn drop_token(&mut self, column: usize) -> Result<Move, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let mv = self.board.drop_token(column, self.current)?;
        tracing::debug!(player = %self.current, column = mv.column, row = mv.row, "token dropped");
        Ok(mv)
    }

    /// Decide whether `mv`, just played by the current player, ended the game.
    /// A winning move that also fills the board is a win.
    pub fn check_endgame(&mut self, mv: Move) -> GameStatus {
        self.status = if self.board.check_win(mv, self.current) {
            GameStatus::Won(self.current)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        };

        match self.status {
            GameStatus::Won(id) => tracing::info!(winner = self.player(id).name(), "game won"),
            GameStatus::Draw => tracing::info!("game drawn"),
            GameStatus::Ongoing => {}
        }
        self.status
    }

    pub fn switch_player(&mut self) {
        self.current = self.current.other();
        tracing::debug!(player = %self.current, "turn passed");
    }

    /// Drop, check for the end, and pass the turn unless the game is over.
    pub fn play_turn(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        let mv = self.drop_token(column)?;
        let status = self.check_endgame(mv);
        if !status.is_terminal() {
            self.switch_player();
        }
        Ok(status)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new(Player::new("Player One", '1'), Player::new("Player Two", '2'))
    }
}
