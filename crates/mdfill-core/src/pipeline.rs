use log::debug;

use mdfill_util::string::escape::decode_escapes;

use crate::document::{DestinationSink, DocumentError, SourceProvider};
use crate::render::Render;

/// Walk the provider at index 1, 2, 3, ... until the first absent index,
/// decoding each raw text, rendering it, and writing the HTML into the sink
/// at the same index. Returns the number of slots filled.
///
/// Indices after a gap are never visited; absence is the terminator, not an
/// error. The traversal holds no state of its own and can be re-run.
pub fn fill<P, S, R>(provider: &P, sink: &mut S, renderer: &R) -> Result<usize, DocumentError>
where
    P: SourceProvider,
    S: DestinationSink,
    R: Render,
{
    let mut index = 1;
    while let Some(raw) = provider.source(index) {
        let decoded = decode_escapes(raw);
        let html = renderer.render(&decoded);
        debug!(
            target: "mdfill",
            "filled slot {} ({} raw chars, {} html bytes)",
            index,
            raw.chars().count(),
            html.len()
        );
        sink.accept(index, &html)?;
        index += 1;
    }
    Ok(index - 1)
}

/// [`fill`] for the common case where one document carries both the source
/// elements and the output slots, as the scanned page does.
pub fn fill_in_place<R>(
    doc: &mut crate::document::IndexedDocument,
    renderer: &R,
) -> Result<usize, DocumentError>
where
    R: Render,
{
    let mut index = 1;
    loop {
        let html = match doc.source(index) {
            Some(raw) => renderer.render(&decode_escapes(raw)),
            None => break,
        };
        doc.accept(index, &html)?;
        index += 1;
    }
    Ok(index - 1)
}
