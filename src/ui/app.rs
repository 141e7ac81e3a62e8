use crate::game::{GameSession, GameStatus, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: GameSession,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        App {
            session,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| -> io::Error { e.into() })?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_token();
            }
            KeyCode::Char('r') => {
                self.session = self.session.restart();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a token in the selected column
    fn drop_token(&mut self) {
        if self.session.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if self.session.is_column_full(self.selected_column) {
            self.message = Some("That column is full!".to_string());
            return;
        }

        match self.session.play_turn(self.selected_column) {
            Ok(GameStatus::Won(id)) => {
                self.message = Some(format!("{} wins!", self.session.player(id).name()));
            }
            Ok(GameStatus::Draw) => {
                self.message = Some("Board is full! It's a draw!".to_string());
            }
            Ok(GameStatus::Ongoing) => {}
            Err(err) => {
                tracing::warn!(%err, "move refused");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameSession::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, PlayerId, ROWS};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = App::default();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.session.board().get(2, ROWS - 1),
            Cell::Occupied(PlayerId::One)
        );
        assert_eq!(app.session.current_id(), PlayerId::Two);
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = App::default();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, COLS - 1);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_full_column_shows_message() {
        let mut app = App::default();
        for _ in 0..ROWS {
            press(&mut app, KeyCode::Char('1'));
        }
        let current = app.session.current_id();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.message.as_deref(), Some("That column is full!"));
        assert_eq!(app.session.current_id(), current);
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = App::default();
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.message.as_deref(), Some("Player One wins!"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.session.is_terminal());
        assert_eq!(app.session.board().token_count(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
