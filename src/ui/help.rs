//! Key binding overlay

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use super::quiz_panel::centered_rect;
use crate::theme::Theme;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Quiz",
        &[
            ("a-f / 1-6", "Choose an answer"),
            ("?", "Ask for an AI explanation"),
            ("n / Enter", "Next question"),
            ("j / k", "Scroll"),
        ],
    ),
    (
        "Navigation",
        &[
            ("t", "Cycle topic"),
            ("r", "Resources"),
            ("p", "Practice"),
            ("v / d", "Copy video / docs link (resources)"),
            ("Esc", "Back"),
            ("F1", "Toggle this help"),
            ("Ctrl-C", "Quit"),
        ],
    ),
    (
        "Commands",
        &[
            (":topic <name>", "Switch to javascript or react"),
            (":restart", "Start the quiz over"),
            (":yank video|docs", "Copy a resource link"),
            (":model <name>", "haiku, sonnet or opus"),
            (":key <api-key>", "Store your Anthropic API key"),
            (":q", "Quit"),
        ],
    ),
];

/// Draw the help overlay
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = help_lines(theme);
    let overlay = centered_rect(60, lines.len() as u16 + 4, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(" Help ")
        .title_bottom(Line::from(" Esc to close ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .padding(Padding::new(2, 2, 1, 0))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (section, keys)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            *section,
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(theme.accent_primary)),
                Span::styled(*desc, Style::default().fg(theme.fg_primary)),
            ]));
        }
    }
    lines
}
