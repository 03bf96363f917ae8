//! Code highlighting for question samples and AI answers

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::theme::Theme;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const SYNTECT_THEME: &str = "base16-ocean.dark";

/// Map fence labels to syntect syntax names.
///
/// The default syntax set has no JSX/TypeScript grammar, so those fall back
/// to JavaScript, which is close enough for short samples.
fn normalize_language(lang: &str) -> &str {
    let base = lang.split(',').next().unwrap_or(lang).trim();

    match base.to_lowercase().as_str() {
        "js" | "javascript" | "jsx" | "mjs" | "cjs" => "JavaScript",
        "ts" | "typescript" | "tsx" => "JavaScript",
        "json" => "JSON",
        "html" | "htm" => "HTML",
        "css" => "CSS",
        "sh" | "bash" | "shell" | "console" => "Bourne Again Shell (bash)",
        "rs" | "rust" => "Rust",
        "py" | "python" => "Python",
        _ => base,
    }
}

fn find_syntax(language: Option<&str>) -> Option<&'static SyntaxReference> {
    let lang = language?;
    let normalized = normalize_language(lang);

    SYNTAX_SET
        .find_syntax_by_name(normalized)
        .or_else(|| SYNTAX_SET.find_syntax_by_extension(&normalized.to_lowercase()))
        .or_else(|| SYNTAX_SET.find_syntax_by_extension(lang))
}

/// Highlight a block of code, one span list per line
pub fn highlight_code(code: &str, language: Option<&str>, theme: &Theme) -> Vec<Vec<Span<'static>>> {
    let plain = Style::default().fg(theme.fg_secondary).bg(theme.bg_secondary);

    let (Some(syntax), Some(syntect_theme)) =
        (find_syntax(language), THEME_SET.themes.get(SYNTECT_THEME))
    else {
        return code.lines().map(|l| vec![Span::styled(l.to_string(), plain)]).collect();
    };

    // Highlight line by line so multi-line constructs keep their state
    let mut highlighter = HighlightLines::new(syntax, syntect_theme);
    let mut out = Vec::new();

    for line in code.lines() {
        let with_newline = format!("{}\n", line);
        match highlighter.highlight_line(&with_newline, &SYNTAX_SET) {
            Ok(ranges) => {
                let spans = ranges
                    .into_iter()
                    .filter_map(|(style, text)| {
                        let text = text.trim_end_matches('\n');
                        if text.is_empty() {
                            return None;
                        }
                        Some(Span::styled(text.to_string(), convert_style(style, theme)))
                    })
                    .collect();
                out.push(spans);
            }
            Err(e) => {
                tracing::debug!("Highlighting failed, using plain text: {}", e);
                out.push(vec![Span::styled(line.to_string(), plain)]);
            }
        }
    }

    out
}

fn convert_style(style: syntect::highlighting::Style, theme: &Theme) -> Style {
    let fg = style.foreground;
    let mut converted = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)).bg(theme.bg_secondary);

    if style.font_style.contains(FontStyle::BOLD) {
        converted = converted.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        converted = converted.add_modifier(Modifier::ITALIC);
    }
    converted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_javascript_family() {
        assert_eq!(normalize_language("javascript"), "JavaScript");
        assert_eq!(normalize_language("jsx"), "JavaScript");
        assert_eq!(normalize_language("js,ignore"), "JavaScript");
    }

    #[test]
    fn finds_javascript_syntax() {
        assert!(find_syntax(Some("javascript")).is_some());
        assert!(find_syntax(Some("jsx")).is_some());
        assert!(find_syntax(None).is_none());
    }

    #[test]
    fn highlights_each_line() {
        let theme = Theme::default();
        let lines = highlight_code("let x = 5;\nconsole.log(x);", Some("javascript"), &theme);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].len() > 1);
        let text: String = lines[1].iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "console.log(x);");
    }

    #[test]
    fn unknown_language_is_plain() {
        let theme = Theme::default();
        let lines = highlight_code("some code", Some("nonexistent_lang"), &theme);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 1);
        assert_eq!(lines[0][0].content, "some code");
    }
}
