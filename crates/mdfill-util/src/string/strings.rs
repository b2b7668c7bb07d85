use std::borrow::Cow;

use html_escape::decode_html_entities;
use html_escape::encode_text;

/// Decode HTML entities in `markup`, e.g. `&amp;lt;` back to `&lt;`.
/// This is the analogue of reading an element's text content out of a page.
pub fn unescape_markup(markup: &str) -> Cow<'_, str> {
    decode_html_entities(markup)
}

/// Encode `text` for safe use as HTML element content.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    encode_text(text)
}
