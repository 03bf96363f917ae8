//! Resources screen: links and quick tips for the current topic

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::catalog::Topic;
use crate::theme::Theme;

/// Draw the resources screen
pub fn draw(frame: &mut Frame, area: Rect, topic: Topic, scroll: u16, theme: &Theme) {
    let block = Block::default()
        .title(format!(" {} ", topic.resources().title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .padding(Padding::new(2, 2, 1, 0))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = resource_lines(topic, theme, inner.width as usize);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

/// Build the lines of the resources screen
pub fn resource_lines(topic: Topic, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let res = topic.resources();
    let heading = Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD);
    let link = Style::default().fg(theme.info).add_modifier(Modifier::UNDERLINED);
    let key = Style::default().fg(theme.accent_primary);
    let muted = Style::default().fg(theme.fg_muted);

    let mut lines = vec![
        Line::from(Span::styled("Video Tutorial", heading)),
        Line::from(vec![Span::styled("  ", muted), Span::styled(res.video_url, link)]),
        Line::from(vec![Span::styled("  [v] ", key), Span::styled("copy link", muted)]),
        Line::from(""),
        Line::from(Span::styled("Documentation", heading)),
        Line::from(vec![Span::styled("  ", muted), Span::styled(res.docs_url, link)]),
        Line::from(vec![Span::styled("  [d] ", key), Span::styled("copy link", muted)]),
        Line::from(""),
        Line::from(Span::styled("Quick Tips", heading)),
    ];

    let tip_width = width.saturating_sub(4).max(10);
    for tip in res.tips {
        for (i, row) in textwrap::wrap(tip, tip_width).into_iter().enumerate() {
            let lead = if i == 0 { "  • " } else { "    " };
            lines.push(Line::from(vec![
                Span::styled(lead, Style::default().fg(theme.accent_secondary)),
                Span::styled(row.into_owned(), Style::default().fg(theme.fg_primary)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter] ", key),
        Span::styled(format!("Practice {} questions", topic.display_name()), muted),
        Span::styled("    [t] ", key),
        Span::styled(format!("Switch to {}", topic.next().display_name()), muted),
    ]));

    lines
}
