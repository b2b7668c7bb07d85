use pulldown_cmark::{html, Event, Options, Parser};

use mdfill_util::string::strings::escape_markup;

/// The rendering collaborator: decoded plain text in, HTML out. Rendering is
/// infallible; unrenderable input is simply text.
pub trait Render {
    fn render(&self, text: &str) -> String;
}

/// Markdown to HTML via pulldown-cmark.
pub struct MarkdownRenderer {
    options: Options,
    trust_raw_html: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self {
            options,
            trust_raw_html: false,
        }
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass raw HTML in the source through to the output instead of
    /// degrading it to escaped text. Only for content from a trusted origin.
    pub fn trust_raw_html(mut self) -> Self {
        self.trust_raw_html = true;
        self
    }
}

impl Render for MarkdownRenderer {
    fn render(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.options);
        let mut out = String::new();
        if self.trust_raw_html {
            html::push_html(&mut out, parser);
        } else {
            // Raw HTML events become text, which push_html then escapes.
            let filtered = parser.map(|event| match event {
                Event::Html(markup) | Event::InlineHtml(markup) => Event::Text(markup),
                other => other,
            });
            html::push_html(&mut out, filtered);
        }
        out
    }
}

/// Fallback renderer that does no markdown at all: entity-escape the text
/// and keep its line structure.
pub struct PlainRenderer;

impl Render for PlainRenderer {
    fn render(&self, text: &str) -> String {
        escape_markup(text).replace('\n', "<br />\n")
    }
}
