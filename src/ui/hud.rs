use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameSession;

/// Renders the status line and returns the remaining play area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameSession) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(state.snake.size(), state.score)).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}

/// `Length:<size>  Score:<score>` with highlighted values.
#[must_use]
pub fn status_line(size: usize, score: u32) -> Line<'static> {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Length: ", label),
        Span::styled(size.to_string(), value),
        Span::styled("    Score: ", label),
        Span::styled(score.to_string(), value),
    ])
}

#[cfg(test)]
mod tests {
    use super::status_line;

    #[test]
    fn status_line_shows_length_and_score() {
        let text: String = status_line(3, 80)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();

        assert_eq!(text, "Length: 3    Score: 80");
    }
}
