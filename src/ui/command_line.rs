//! Bottom status row: command input, messages and key hints

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{AppState, CommandLineState, Screen};
use crate::theme::Theme;

/// Draw the status row at the bottom of the screen
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let progress = progress_label(state);
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(progress.chars().count() as u16)])
            .areas(area);

    frame.render_widget(Paragraph::new(status_line(state, theme)), left);
    frame.render_widget(
        Paragraph::new(Span::styled(progress, Style::default().fg(theme.accent_secondary)))
            .alignment(Alignment::Right),
        right,
    );
}

/// Left side of the status row
fn status_line(state: &AppState, theme: &Theme) -> Line<'static> {
    let cl = &state.command_line;
    if cl.is_input_mode() {
        return input_line(cl, theme);
    }

    match &cl.message {
        Some(msg) if cl.is_error => Line::from(Span::styled(msg.clone(), Style::default().fg(theme.error))),
        Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(theme.fg_secondary))),
        None => hint_line(state.screen, theme),
    }
}

/// Key hints for a screen, keys highlighted
fn hint_line(screen: Screen, theme: &Theme) -> Line<'static> {
    let hints: &[(&str, &str)] = match screen {
        Screen::Resources => &[("Enter", "practice"), ("t", "topic"), ("F1", "help"), (":", "commands")],
        Screen::Quiz => &[
            ("a-f", "answer"),
            ("?", "help me"),
            ("n", "next"),
            ("Esc", "close"),
            ("F1", "keys"),
        ],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!("{} ", key), Style::default().fg(theme.accent_primary)));
        spans.push(Span::styled(format!("{}  ", label), Style::default().fg(theme.fg_muted)));
    }
    Line::from(spans)
}

/// Topic and score, shown on the right while a quiz is open
fn progress_label(state: &AppState) -> String {
    match state.screen {
        Screen::Quiz => format!(
            "{} {}/{} ",
            state.topic().display_name(),
            state.quiz.score(),
            state.quiz.len()
        ),
        Screen::Resources => format!("{} ", state.topic().display_name()),
    }
}

/// The `:` prompt with a block cursor over the character at the cursor
fn input_line(cl: &CommandLineState, theme: &Theme) -> Line<'static> {
    let prompt = Style::default().fg(theme.accent_primary);
    let cursor = Style::default().fg(theme.bg_primary).bg(theme.fg_primary).add_modifier(Modifier::BOLD);

    let split = cl.input.char_indices().nth(cl.cursor).map(|(i, _)| i).unwrap_or(cl.input.len());
    let (before, rest) = cl.input.split_at(split);
    let mut rest = rest.chars();
    let under = rest.next().unwrap_or(' ');

    let mut spans = vec![Span::styled(format!(":{}", before), prompt)];
    spans.push(Span::styled(under.to_string(), cursor));
    let after: String = rest.collect();
    if !after.is_empty() {
        spans.push(Span::styled(after, prompt));
    }
    Line::from(spans)
}
