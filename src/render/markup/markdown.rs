use pulldown_cmark::{html, Options, Parser};

use crate::core::page::RawMarkdown;

/// Markdown-to-HTML conversion. Pure and deterministic: same body in, same
/// fragment out, with the same extension set for every page.
#[derive(Debug)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    #[allow(clippy::unused_self)]
    pub fn render(&self, raw_markdown: &RawMarkdown) -> String {
        render(raw_markdown.as_ref())
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render(raw_markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(raw_markdown, options);

    let mut buf = String::new();
    html::push_html(&mut buf, parser);

    // fragment only; the template decides surrounding whitespace
    let trimmed = buf.trim_end().len();
    buf.truncate(trimmed);
    buf
}
