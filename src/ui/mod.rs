//! UI rendering components

pub mod command_line;
pub mod help;
pub mod markdown;
pub mod quiz_panel;
pub mod resources;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::state::{AppState, Screen};
use crate::catalog::Topic;
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    let [header, body, footer] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1), Constraint::Length(1)])
            .areas(area);

    draw_header(frame, header, state, theme);

    match state.screen {
        Screen::Resources => resources::draw(frame, body, state.topic(), state.scroll, theme),
        Screen::Quiz => {
            quiz_panel::draw(frame, body, &state.quiz, state.scroll, theme);
            if state.is_celebrating(Instant::now()) {
                quiz_panel::draw_celebration(frame, body, theme);
            }
        }
    }

    command_line::draw(frame, footer, state, theme);

    if state.show_help {
        help::draw(frame, area, theme);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut spans = vec![Span::styled(
        " CodeMaster ",
        Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw(" "));

    for topic in Topic::all() {
        let style = if *topic == state.topic() {
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.fg_muted)
        };
        spans.push(Span::styled(format!(" {} ", topic.display_name()), style));
    }

    spans.push(Span::styled("│", Style::default().fg(theme.border)));

    for (screen, label) in [(Screen::Resources, "Resources"), (Screen::Quiz, "Practice")] {
        let style = if screen == state.screen {
            Style::default().fg(theme.fg_primary).bg(theme.selection)
        } else {
            Style::default().fg(theme.fg_muted)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg_secondary)),
        area,
    );
}
