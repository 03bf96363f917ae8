//! Quiz screen

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use super::markdown::{render_markdown, wrap_spans};
use crate::catalog::Question;
use crate::quiz::QuizSession;
use crate::theme::Theme;

/// Draw the quiz for the current question
pub fn draw(frame: &mut Frame, area: Rect, quiz: &QuizSession, scroll: u16, theme: &Theme) {
    let question = quiz.current_question();
    let title = format!(" {} Quiz ", quiz.topic().display_name());
    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(format!(" {} ", question.difficulty.label())).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = quiz_lines(quiz, theme, inner.width as usize);
    let max_scroll = (lines.len() as u16).saturating_sub(inner.height / 2);
    let para = Paragraph::new(lines).scroll((scroll.min(max_scroll), 0));
    frame.render_widget(para, inner);
}

/// Build every line of the quiz body
pub fn quiz_lines(quiz: &QuizSession, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let question = quiz.current_question();
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!("Question {} of {}", quiz.current_index() + 1, quiz.len()),
            Style::default().fg(theme.fg_muted),
        ),
        Span::styled("  ·  ", Style::default().fg(theme.border)),
        Span::styled(
            format!("Score {}/{}", quiz.score(), quiz.len()),
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    lines.extend(render_markdown(&question.text, theme, width));
    lines.push(Line::from(""));

    push_options(&mut lines, quiz, question, theme, width);

    if !quiz.is_answered() {
        lines.push(Line::from(vec![
            Span::styled("[?] ", Style::default().fg(theme.accent_primary)),
            Span::styled("I need help understanding this", Style::default().fg(theme.info)),
        ]));
        return lines;
    }

    if quiz.explanation_visible() {
        lines.push(section_title("Explanation", theme));
        lines.extend(render_markdown(&question.explanation, theme, width));
        lines.push(Line::from(""));
    }

    if quiz.provider_pending() {
        lines.push(section_title("AI Explanation", theme));
        lines.push(Line::from(Span::styled(
            "Loading AI explanation...",
            Style::default().fg(theme.fg_muted).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    } else if let Some(text) = quiz.supplemental_explanation() {
        lines.push(section_title("AI Explanation", theme));
        lines.extend(render_markdown(text, theme, width));
        lines.push(Line::from(""));
    }

    if quiz.can_advance() {
        lines.push(Line::from(Span::styled(
            "[n] Next question →",
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )));
    } else if quiz.is_terminal() {
        lines.push(Line::from(Span::styled(
            format!("Quiz complete! Final score: {}/{}", quiz.score(), quiz.len()),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            ":restart to try again, t to switch topic",
            Style::default().fg(theme.fg_muted),
        )));
    }

    lines
}

fn push_options(
    lines: &mut Vec<Line<'static>>,
    quiz: &QuizSession,
    question: &Question,
    theme: &Theme,
    width: usize,
) {
    let answered = quiz.is_answered();
    let selected = quiz.selected_option();

    for (i, option) in question.options.iter().enumerate() {
        let is_correct = question.is_correct(i);
        let is_selected = selected == Some(i);

        let (marker, style) = if !answered {
            ("○", Style::default().fg(theme.fg_secondary))
        } else if is_correct {
            ("✓", Style::default().fg(theme.success).add_modifier(Modifier::BOLD))
        } else if is_selected {
            ("✗", Style::default().fg(theme.error).add_modifier(Modifier::BOLD))
        } else {
            ("○", Style::default().fg(theme.fg_muted))
        };

        let prefix = format!("  {} {}) ", marker, Question::option_label(i));
        let indent = " ".repeat(prefix.chars().count());
        let wrapped =
            wrap_spans(vec![Span::styled(option.clone(), style)], width.saturating_sub(indent.len()));

        for (j, line) in wrapped.into_iter().enumerate() {
            let lead = if j == 0 { Span::styled(prefix.clone(), style) } else { Span::raw(indent.clone()) };
            let mut spans = vec![lead];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
    }
    lines.push(Line::from(""));
}

fn section_title(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

/// Draw the "correct answer" banner over the quiz
pub fn draw_celebration(frame: &mut Frame, area: Rect, theme: &Theme) {
    let banner = centered_rect(40, 5, area);
    frame.render_widget(Clear, banner);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(banner);
    frame.render_widget(block, banner);

    let text = vec![
        Line::from(Span::styled(
            "🎉 Correct! 🎉",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Great job!", Style::default().fg(theme.fg_primary))),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

/// Create a centered rectangle with the given width percentage and fixed height
pub fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(r.height)),
        Constraint::Fill(1),
    ])
    .areas(r);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
