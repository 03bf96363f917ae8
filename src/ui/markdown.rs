//! Render markdown blocks to styled lines

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::markdown::{self, Block};
use crate::syntax;
use crate::theme::Theme;

/// Parse and render a markdown string
pub fn render_markdown(text: &str, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = render_blocks(&markdown::parse(text), theme, width);
    // Drop the trailing spacer so callers control separation
    while lines.last().is_some_and(|l| l.spans.iter().all(|s| s.content.is_empty())) {
        lines.pop();
    }
    lines
}

/// Render content blocks to styled lines
pub fn render_blocks(blocks: &[Block], theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { level, text } => render_heading(&mut lines, *level, text, theme, width),
            Block::Paragraph(text) => render_paragraph(&mut lines, text, theme, width),
            Block::Code { language, code } => {
                render_code_block(&mut lines, language.as_deref(), code, theme)
            }
            Block::List { ordered, items } => render_list(&mut lines, *ordered, items, theme, width),
            Block::Quote(text) => render_blockquote(&mut lines, text, theme, width),
            Block::Rule => render_horizontal_rule(&mut lines, theme, width),
        }
    }

    lines
}

fn render_heading(lines: &mut Vec<Line<'static>>, level: u8, text: &str, theme: &Theme, width: usize) {
    let style = match level {
        1 => Style::default()
            .fg(theme.accent_primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        3 => Style::default().fg(theme.info).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
    };

    let spans = parse_inline_formatting(text, theme)
        .into_iter()
        .map(|s| {
            let patched = if s.style.bg.is_some() { s.style } else { s.style.patch(style) };
            Span::styled(s.content, patched)
        })
        .collect();
    lines.extend(wrap_spans(spans, width));
    lines.push(Line::from(""));
}

fn render_paragraph(lines: &mut Vec<Line<'static>>, text: &str, theme: &Theme, width: usize) {
    for paragraph_line in text.split('\n') {
        let spans = parse_inline_formatting(paragraph_line, theme);
        lines.extend(wrap_spans(spans, width));
    }
    lines.push(Line::from(""));
}

/// Parse inline markdown formatting into styled spans
fn parse_inline_formatting(text: &str, theme: &Theme) -> Vec<Span<'static>> {
    let plain = Style::default().fg(theme.fg_primary);
    let mut spans = Vec::new();
    let mut chars = text.chars().peekable();
    let mut current = String::new();

    let flush = |current: &mut String, spans: &mut Vec<Span<'static>>| {
        if !current.is_empty() {
            spans.push(Span::styled(std::mem::take(current), plain));
        }
    };

    while let Some(c) = chars.next() {
        match c {
            '`' => {
                let mut code = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == '`' {
                        closed = true;
                        break;
                    }
                    code.push(next);
                }
                if closed {
                    flush(&mut current, &mut spans);
                    spans.push(Span::styled(code, Style::default().fg(theme.code).bg(theme.bg_secondary)));
                } else {
                    current.push('`');
                    current.push_str(&code);
                }
            }
            '*' => {
                let is_double = chars.peek() == Some(&'*');
                if is_double {
                    chars.next();
                }

                let mut content = String::new();
                let mut found_end = false;
                while let Some(next) = chars.next() {
                    if next == '*' {
                        if !is_double {
                            found_end = true;
                            break;
                        }
                        if chars.peek() == Some(&'*') {
                            chars.next();
                            found_end = true;
                            break;
                        }
                    }
                    content.push(next);
                }

                if found_end && !content.is_empty() {
                    flush(&mut current, &mut spans);
                    let modifier = if is_double { Modifier::BOLD } else { Modifier::ITALIC };
                    spans.push(Span::styled(content, plain.add_modifier(modifier)));
                } else {
                    // Not a valid marker, treat as literal
                    current.push('*');
                    if is_double {
                        current.push('*');
                    }
                    current.push_str(&content);
                    if found_end {
                        current.push_str(if is_double { "**" } else { "*" });
                    }
                }
            }
            _ => current.push(c),
        }
    }

    flush(&mut current, &mut spans);

    if spans.is_empty() {
        spans.push(Span::raw(""));
    }

    spans
}

/// Wrap styled spans into lines while preserving formatting
pub fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![Line::from(spans)];
    }

    let mut lines = Vec::new();
    let mut current_line: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0;

    for span in spans {
        let style = span.style;

        for word in span.content.split_inclusive(char::is_whitespace) {
            let word_len = word.chars().count();

            if current_width + word_len > width && current_width > 0 {
                lines.push(Line::from(std::mem::take(&mut current_line)));
                current_width = 0;
            }

            current_line.push(Span::styled(word.to_string(), style));
            current_width += word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(Line::from(current_line));
    }

    if lines.is_empty() {
        lines.push(Line::from(""));
    }

    lines
}

fn render_code_block(lines: &mut Vec<Line<'static>>, language: Option<&str>, code: &str, theme: &Theme) {
    let border = Style::default().fg(theme.border);
    lines.push(Line::from(vec![
        Span::styled("┌─ ", border),
        Span::styled(language.unwrap_or("code").to_string(), Style::default().fg(theme.info)),
        Span::styled(" ─", border),
    ]));

    for highlighted in syntax::highlight_code(code, language, theme) {
        let mut line_spans = vec![Span::styled("│ ", border)];
        line_spans.extend(highlighted);
        lines.push(Line::from(line_spans));
    }

    lines.push(Line::from(Span::styled("└──────", border)));
    lines.push(Line::from(""));
}

fn render_list(
    lines: &mut Vec<Line<'static>>,
    ordered: bool,
    items: &[String],
    theme: &Theme,
    width: usize,
) {
    let marker_style = Style::default().fg(theme.accent_secondary);

    for (i, item) in items.iter().enumerate() {
        let prefix = if ordered { format!("  {}. ", i + 1) } else { "  • ".to_string() };
        let indent = " ".repeat(prefix.chars().count());
        let wrapped =
            wrap_spans(parse_inline_formatting(item, theme), width.saturating_sub(indent.len()));

        for (j, line) in wrapped.into_iter().enumerate() {
            let lead = if j == 0 {
                Span::styled(prefix.clone(), marker_style)
            } else {
                Span::raw(indent.clone())
            };
            let mut line_spans = vec![lead];
            line_spans.extend(line.spans);
            lines.push(Line::from(line_spans));
        }
    }
    lines.push(Line::from(""));
}

fn render_blockquote(lines: &mut Vec<Line<'static>>, text: &str, theme: &Theme, width: usize) {
    let prefix = "  │ ";
    let muted: Vec<Span<'static>> = parse_inline_formatting(text, theme)
        .into_iter()
        .map(|s| Span::styled(s.content, s.style.fg(theme.fg_muted)))
        .collect();

    for line in wrap_spans(muted, width.saturating_sub(4)) {
        let mut line_spans = vec![Span::styled(prefix, Style::default().fg(theme.accent_primary))];
        line_spans.extend(line.spans);
        lines.push(Line::from(line_spans));
    }
    lines.push(Line::from(""));
}

fn render_horizontal_rule(lines: &mut Vec<Line<'static>>, theme: &Theme, width: usize) {
    let rule_width = width.saturating_sub(4).min(32);
    lines.push(Line::from(Span::styled("─".repeat(rule_width), Style::default().fg(theme.border))));
    lines.push(Line::from(""));
}
