//! Line-based console driver: prompts on a writer, reads answers from a
//! reader, and prints the board as plain text between turns.

use std::io::{self, BufRead, Write};

use crate::error::InputError;
use crate::game::{Cell, ColumnRejection, ColumnSource, GameSession, GameStatus, COLS, ROWS};

const INTRO: &str = "Hello and welcome to Connect Four! A game where 2 players take turns to drop their tokens and try to get four in a row!";
const OUTRO: &str = "See you next time! Goodbye~";
const PROMPT: &str = "Choose a column from 1 to 7: ";

pub struct Console<R, W> {
    input: R,
    output: W,
    empty_marker: char,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, empty_marker: char) -> Self {
        Console {
            input,
            output,
            empty_marker,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play one game to the end and return how it finished.
    pub fn play(&mut self, session: &mut GameSession) -> Result<GameStatus, InputError> {
        writeln!(self.output, "\n{INTRO}\n")?;

        // A session that has already ended goes straight to the result.
        let mut status = session.status();
        while !status.is_terminal() {
            self.print_board(session)?;
            writeln!(self.output, "It is {}'s turn!", session.current_player().name())?;

            let column = session.choose_column(self)?;
            status = session.play_turn(column)?;
        }

        self.print_board(session)?;
        match status {
            GameStatus::Won(id) => writeln!(self.output, "{} wins!", session.player(id).name())?,
            GameStatus::Draw => writeln!(self.output, "Board is full! It's a draw!")?,
            GameStatus::Ongoing => {}
        }
        writeln!(self.output, "{OUTRO}")?;
        self.output.flush()?;
        Ok(status)
    }

    fn print_board(&mut self, session: &GameSession) -> io::Result<()> {
        let text = render_board(session, self.empty_marker);
        self.output.write_all(text.as_bytes())
    }
}

impl<R: BufRead, W: Write> ColumnSource for Console<R, W> {
    fn request_column(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn reject(&mut self, rejection: ColumnRejection) -> io::Result<()> {
        writeln!(self.output, "{rejection}")
    }
}

/// Text rendering of the board with column numbers above and below.
pub fn render_board(session: &GameSession, empty_marker: char) -> String {
    let header = (1..=COLS)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let rule = "-".repeat(COLS * 2 - 1);

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for row in 0..ROWS {
        let line = (0..COLS)
            .map(|column| marker(session, column, row, empty_marker).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out
}

fn marker(session: &GameSession, column: usize, row: usize, empty: char) -> char {
    match session.board().get(column, row) {
        Cell::Empty => empty,
        Cell::Occupied(id) => session.player(id).marker(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerId;
    use std::io::Cursor;

    fn play(script: &str) -> (Result<GameStatus, InputError>, String) {
        let mut session = GameSession::default();
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new(), '0');
        let result = console.play(&mut session);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_render_empty_board() {
        let text = render_board(&GameSession::default(), '0');
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS + 4);
        assert_eq!(lines[0], "1 2 3 4 5 6 7");
        assert_eq!(lines[1], "-------------");
        assert_eq!(lines[2], "0 0 0 0 0 0 0");
        assert_eq!(lines[ROWS + 3], "1 2 3 4 5 6 7");
    }

    #[test]
    fn test_render_uses_player_markers() {
        let mut session = GameSession::default();
        session.play_turn(0).unwrap();
        session.play_turn(0).unwrap();
        let text = render_board(&session, '.');
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[ROWS], "2 . . . . . .");
        assert_eq!(lines[ROWS + 1], "1 . . . . . .");
    }

    #[test]
    fn test_console_game_player_one_wins() {
        let (result, output) = play("1\n1\n2\n2\n3\n3\n4\n");
        assert_eq!(result.unwrap(), GameStatus::Won(PlayerId::One));
        assert!(output.contains("Hello and welcome to Connect Four!"));
        assert!(output.contains("It is Player Two's turn!"));
        assert!(output.contains("Player One wins!"));
        assert!(output.ends_with("See you next time! Goodbye~\n"));
    }

    #[test]
    fn test_console_reprompts_on_bad_input() {
        let (result, output) = play("8\nabc\n1\n1\n2\n2\n3\n3\n4\n");
        assert_eq!(result.unwrap(), GameStatus::Won(PlayerId::One));
        assert_eq!(
            output
                .matches("Choice is not between 1-7! Please try again.")
                .count(),
            2
        );
    }

    #[test]
    fn test_console_reprompts_on_full_column() {
        // Six alternating drops fill column 1 without a winner.
        let (result, output) = play("1\n1\n1\n1\n1\n1\n1\n2\n3\n2\n3\n2\n3\n2\n");
        assert_eq!(result.unwrap(), GameStatus::Won(PlayerId::One));
        assert!(output.contains("That column is full! Please try again."));
    }

    #[test]
    fn test_console_finished_session_skips_to_result() {
        let mut session = GameSession::default();
        for column in [0, 0, 1, 1, 2, 2, 3] {
            session.play_turn(column).unwrap();
        }
        let mut console = Console::new(Cursor::new("5\n".to_string()), Vec::new(), '0');
        let result = console.play(&mut session);
        assert_eq!(result.unwrap(), GameStatus::Won(PlayerId::One));
        assert_eq!(session.board().get(4, ROWS - 1), Cell::Empty);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(!output.contains("Choose a column"));
        assert!(output.contains("Player One wins!"));
        assert!(output.ends_with("See you next time! Goodbye~\n"));
    }

    #[test]
    fn test_console_stops_when_input_closes() {
        let (result, output) = play("4\n");
        assert!(matches!(result, Err(InputError::Closed)));
        assert!(!output.contains("Goodbye"));
    }
}
