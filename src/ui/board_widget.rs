use crate::game::{Cell, GameSession, PlayerId, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Colour used for a player's tokens and name.
pub fn player_color(id: PlayerId) -> Color {
    match id {
        PlayerId::One => Color::Red,
        PlayerId::Two => Color::Yellow,
    }
}

/// Board lines with column numbers above, a frame, and a selection arrow below.
pub fn board_lines(session: &GameSession, selected_column: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else if session.is_column_full(col) {
            col_line.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let span = match session.board().get(col, row) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(id) => Span::styled(
                    format!(" {} ", session.player(id).marker()),
                    Style::default()
                        .fg(player_color(id))
                        .add_modifier(Modifier::BOLD),
                ),
            };
            row_spans.push(span);
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_board_lines_show_markers() {
        let mut session = GameSession::default();
        session.play_turn(2).unwrap();
        let lines = board_lines(&session, 2);
        assert_eq!(lines.len(), ROWS + 4);
        assert_eq!(text(&lines[1 + ROWS]), "  ║ .  .  1  .  .  .  . ║");
        assert!(text(&lines[ROWS + 3]).contains('▲'));
    }
}
