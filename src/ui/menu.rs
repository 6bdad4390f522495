use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::GAME_OVER_COLOR;
use crate::game::DeathReason;

const POPUP_WIDTH: u16 = 26;

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    size: usize,
    score: u32,
    death_reason: Option<DeathReason>,
) {
    let lines = vec![
        Line::from("Game Over").style(
            Style::default()
                .fg(GAME_OVER_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Length: {size}")),
        Line::from(format!("Score: {score}")),
        Line::from(match death_reason {
            Some(DeathReason::WallCollision) => "Cause: hit wall",
            Some(DeathReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        }),
        Line::from(""),
        Line::from("Press 'R' to restart!").style(Style::default().fg(GAME_OVER_COLOR)),
        Line::from("[Q]/[Esc] Quit").style(Style::default().fg(Color::DarkGray)),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_popup(area, POPUP_WIDTH, height);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Draws a notice asking for a bigger terminal.
pub fn render_too_small(frame: &mut Frame<'_>, area: Rect, needed: (u16, u16)) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("Need at least {}x{}", needed.0, needed.1)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow)),
        area,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(mid);

    center
}
