//! Markdown to block model
//!
//! Question prompts, canned explanations and AI answers are all markdown.
//! This flattens them into a handful of block kinds the UI knows how to draw.
//! Inline code and emphasis stay as `` ` `` / `*` markers inside the text
//! and are styled at render time.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// A block of rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A heading (level 1-6)
    Heading { level: u8, text: String },
    /// A paragraph of text
    Paragraph(String),
    /// A fenced or indented code block
    Code { language: Option<String>, code: String },
    /// A list; `ordered` lists are numbered from 1
    List { ordered: bool, items: Vec<String> },
    /// A blockquote
    Quote(String),
    /// A horizontal rule
    Rule,
}

#[derive(Default)]
struct ParseState {
    blocks: Vec<Block>,
    text: String,
    heading: Option<u8>,
    code: Option<(Option<String>, String)>,
    list: Option<(bool, Vec<String>)>,
    list_depth: usize,
    item: String,
    quote: Option<String>,
}

impl ParseState {
    /// Buffer that inline text currently goes to
    fn sink(&mut self) -> &mut String {
        if let Some((_, code)) = self.code.as_mut() {
            code
        } else if self.list.is_some() {
            &mut self.item
        } else if let Some(quote) = self.quote.as_mut() {
            quote
        } else {
            &mut self.text
        }
    }

    fn flush_paragraph(&mut self) {
        let text = std::mem::take(&mut self.text);
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.blocks.push(Block::Paragraph(trimmed.to_string()));
        }
    }
}

/// Parse a markdown string into blocks
pub fn parse(markdown: &str) -> Vec<Block> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut st = ParseState::default();

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                st.flush_paragraph();
                st.heading = Some(level as u8);
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(level) = st.heading.take() {
                    let text = std::mem::take(&mut st.text).trim().to_string();
                    if !text.is_empty() {
                        st.blocks.push(Block::Heading { level, text });
                    }
                }
            }

            Event::End(TagEnd::Paragraph) => {
                if st.list.is_some() {
                    st.item.push(' ');
                } else if let Some(quote) = st.quote.as_mut() {
                    quote.push('\n');
                } else {
                    st.flush_paragraph();
                }
            }

            Event::Start(Tag::CodeBlock(kind)) => {
                st.flush_paragraph();
                let language = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.trim().is_empty() => {
                        Some(lang.trim().to_string())
                    }
                    _ => None,
                };
                st.code = Some((language, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, code)) = st.code.take() {
                    let code = code.trim_end_matches('\n').to_string();
                    if st.list.is_some() {
                        // Keep code inside list items readable as inline code
                        st.item.push_str(&format!(" `{}` ", code.replace('\n', " ")));
                    } else {
                        st.blocks.push(Block::Code { language, code });
                    }
                }
            }

            Event::Start(Tag::List(first)) => {
                if st.list_depth == 0 {
                    st.flush_paragraph();
                    st.list = Some((first.is_some(), Vec::new()));
                } else {
                    // Nested lists are flattened into their parent
                    let parent = std::mem::take(&mut st.item).trim().to_string();
                    if let (Some((_, items)), false) = (st.list.as_mut(), parent.is_empty()) {
                        items.push(parent);
                    }
                }
                st.list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                st.list_depth = st.list_depth.saturating_sub(1);
                if st.list_depth == 0 {
                    if let Some((ordered, items)) = st.list.take() {
                        if !items.is_empty() {
                            st.blocks.push(Block::List { ordered, items });
                        }
                    }
                }
            }
            Event::End(TagEnd::Item) => {
                let item = std::mem::take(&mut st.item).trim().to_string();
                if let (Some((_, items)), false) = (st.list.as_mut(), item.is_empty()) {
                    items.push(item);
                }
            }

            Event::Start(Tag::BlockQuote(_)) => {
                st.flush_paragraph();
                st.quote = Some(String::new());
            }
            Event::End(TagEnd::BlockQuote(_)) => {
                if let Some(quote) = st.quote.take() {
                    let quote = quote.trim().to_string();
                    if !quote.is_empty() {
                        st.blocks.push(Block::Quote(quote));
                    }
                }
            }

            Event::Rule => {
                st.flush_paragraph();
                st.blocks.push(Block::Rule);
            }

            Event::Text(text) => st.sink().push_str(&text),
            Event::Code(code) => {
                let sink = st.sink();
                sink.push('`');
                sink.push_str(&code);
                sink.push('`');
            }
            Event::Start(Tag::Strong) | Event::End(TagEnd::Strong) => st.sink().push_str("**"),
            Event::Start(Tag::Emphasis) | Event::End(TagEnd::Emphasis) => st.sink().push('*'),

            Event::SoftBreak | Event::HardBreak => {
                let in_code = st.code.is_some();
                let in_quote = st.quote.is_some() && st.list.is_none();
                st.sink().push(if in_code || in_quote { '\n' } else { ' ' });
            }

            // Raw HTML shows up in JSX answers; keep it as literal text
            Event::Html(html) | Event::InlineHtml(html) => st.sink().push_str(&html),

            _ => {}
        }
    }

    st.flush_paragraph();
    st.blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn question_with_code_sample() {
        let md = "What is the output and why?\n```javascript\nconsole.log(typeof typeof 1);\n```";
        assert_eq!(
            parse(md),
            vec![
                Block::Paragraph("What is the output and why?".into()),
                Block::Code {
                    language: Some("javascript".into()),
                    code: "console.log(typeof typeof 1);".into()
                },
            ]
        );
    }

    #[test]
    fn plain_question() {
        let blocks = parse("What is the purpose of useLayoutEffect?");
        assert_eq!(blocks, vec![Block::Paragraph("What is the purpose of useLayoutEffect?".into())]);
    }

    #[test]
    fn headings_and_lists() {
        let md = "## Best practices\n\n1. Use `const`\n2. Prefer **async/await**\n\n- one\n- two";
        assert_eq!(
            parse(md),
            vec![
                Block::Heading { level: 2, text: "Best practices".into() },
                Block::List {
                    ordered: true,
                    items: vec!["Use `const`".into(), "Prefer **async/await**".into()]
                },
                Block::List { ordered: false, items: vec!["one".into(), "two".into()] },
            ]
        );
    }

    #[test]
    fn nested_list_is_flattened() {
        let md = "- outer\n  - inner one\n  - inner two\n- last";
        assert_eq!(
            parse(md),
            vec![Block::List {
                ordered: false,
                items: vec!["outer".into(), "inner one".into(), "inner two".into(), "last".into()]
            }]
        );
    }

    #[test]
    fn blockquote_and_rule() {
        let blocks = parse("> careful\n\n---\n\nafter");
        assert_eq!(
            blocks,
            vec![Block::Quote("careful".into()), Block::Rule, Block::Paragraph("after".into())]
        );
    }

    #[test]
    fn unterminated_fence_still_yields_code() {
        let blocks = parse("What is logged?\n```javascript\nconsole.log(1 + \"2\");");
        assert!(matches!(&blocks[1], Block::Code { code, .. } if code.contains("console.log")));
    }

    #[test]
    fn empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\n").is_empty());
    }
}
