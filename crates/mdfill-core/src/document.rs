use std::borrow::Cow;
use std::collections::BTreeMap;
use std::num::ParseIntError;

use once_cell::sync::Lazy;
use thiserror::Error;

use mdfill_util::parse::pattern::{Pattern, PatternOps};
use mdfill_util::static_pattern_owned;
use mdfill_util::string::strings::unescape_markup;

/// Element id prefix carrying the encoded source text, `markdown-data-1`,
/// `markdown-data-2`, ...
pub const SOURCE_ID_PREFIX: &str = "markdown-data-";
/// Element id prefix of the slot receiving the rendered HTML, `output-1`, ...
pub const OUTPUT_ID_PREFIX: &str = "output-";

static_pattern_owned!(SOURCE_ELEMENT, element_pattern(SOURCE_ID_PREFIX));
static_pattern_owned!(OUTPUT_ELEMENT, element_pattern(OUTPUT_ID_PREFIX));

/// Match an element carrying an indexed id, capturing the index digits and
/// the element text. The `id` attribute must be whitespace-delimited, so
/// attributes merely ending in `id` (`data-id`) do not match, and its value
/// must be wrapped in a matching quote pair. Content is matched lazily up to
/// the nearest closing tag, which is enough for the flat data/output
/// elements this scanner is for.
fn element_pattern(id_prefix: &str) -> String {
    // One alternation branch per quote style; reusing the `index` group
    // name across branches needs regex >= 1.9.
    let quoted = |quote: &'static str| {
        String::from(quote)
            .append_pattern(id_prefix)
            .append_named_capture(r"\d+", "index")
            .append_pattern(quote)
    };
    String::from(r"(?s)<[A-Za-z][A-Za-z0-9]*[^>]*\sid\s*=\s*")
        .append_pattern(
            quoted("\"")
                .append_pattern("|")
                .append_pattern(quoted("'"))
                .make_pattern_group(),
        )
        .append_pattern(r"[^>]*>")
        .append_named_capture(r".*?", "text")
        .append_pattern(r"</")
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("element id carries an index that does not fit in usize: {0}")]
    InvalidIndex(#[from] ParseIntError),
    #[error("two source elements share the index {index}")]
    DuplicateSource { index: usize },
    #[error("no output slot exists for index {index}")]
    MissingOutput { index: usize },
}

/// Supplies the raw, still escaped text for a 1-based index. `None` is the
/// traversal terminator, not an error.
pub trait SourceProvider {
    fn source(&self, index: usize) -> Option<&str>;
}

/// Receives rendered HTML for the slot at `index`, replacing prior content.
pub trait DestinationSink {
    fn accept(&mut self, index: usize, html: &str) -> Result<(), DocumentError>;
}

/// An explicit integer-keyed document: source texts and output slots keyed by
/// their 1-based index instead of id strings assembled at lookup time.
#[derive(Debug, Default)]
pub struct IndexedDocument {
    sources: BTreeMap<usize, String>,
    outputs: BTreeMap<usize, String>,
}

impl IndexedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan an HTML fragment for `markdown-data-N` source elements and
    /// `output-N` slots. Source text is entity-decoded the way a browser
    /// exposes an element's text content.
    pub fn from_markup(markup: &str) -> Result<Self, DocumentError> {
        let mut doc = Self::new();
        for caps in SOURCE_ELEMENT.get_regex().captures_iter(markup) {
            let index: usize = caps["index"].parse()?;
            doc.insert_source(index, unescape_markup(&caps["text"]).into_owned())?;
        }
        for caps in OUTPUT_ELEMENT.get_regex().captures_iter(markup) {
            let index: usize = caps["index"].parse()?;
            doc.insert_output_slot(index);
        }
        Ok(doc)
    }

    pub fn insert_source(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), DocumentError> {
        if self.sources.contains_key(&index) {
            return Err(DocumentError::DuplicateSource { index });
        }
        self.sources.insert(index, text.into());
        Ok(())
    }

    /// Declare an empty output slot at `index`. Writing to an undeclared
    /// slot is a [`DocumentError::MissingOutput`].
    pub fn insert_output_slot(&mut self, index: usize) {
        self.outputs.entry(index).or_default();
    }

    pub fn output(&self, index: usize) -> Option<&str> {
        self.outputs.get(&index).map(String::as_str)
    }

    /// Filled and declared-but-empty output slots in index order.
    pub fn outputs(&self) -> impl Iterator<Item = (usize, &str)> {
        self.outputs.iter().map(|(i, html)| (*i, html.as_str()))
    }
}

impl SourceProvider for IndexedDocument {
    fn source(&self, index: usize) -> Option<&str> {
        self.sources.get(&index).map(String::as_str)
    }
}

impl DestinationSink for IndexedDocument {
    fn accept(&mut self, index: usize, html: &str) -> Result<(), DocumentError> {
        match self.outputs.get_mut(&index) {
            Some(slot) => {
                slot.clear();
                slot.push_str(html);
                Ok(())
            }
            None => Err(DocumentError::MissingOutput { index }),
        }
    }
}
