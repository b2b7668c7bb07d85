#[cfg(test)]
mod tests {
    use mdfill_core::document::{DocumentError, IndexedDocument};
    use mdfill_core::pipeline::{fill, fill_in_place};
    use mdfill_core::render::{MarkdownRenderer, PlainRenderer, Render};
    use mdfill_util::string::escape::decode_escapes;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Assemble a Unicode escape token at runtime so the subject strings
    /// hold a genuine backslash-u sequence rather than a source-level
    /// escape.
    fn unicode_token(hex: &str) -> String {
        format!(r"\u{hex}")
    }

    /// A page the way the serving side writes it: hidden data elements with
    /// escaped message text, empty output slots next to them. The check-mark
    /// Unicode token is split so the markup holds a real backslash-u
    /// sequence.
    const PAGE: &str = concat!(
        r#"<div id="markdown-data-1" style="display:none">## Report\n\nAll good.</div>"#,
        r#"<div id="output-1"></div>"#,
        r#"<div id="markdown-data-2" style="display:none">It\'s \"done\" \u"#,
        "2713",
        r#"</div>"#,
        r#"<div id="output-2"></div>"#,
    );

    #[test]
    fn scanned_page_fills_end_to_end() {
        init_logging();
        let mut doc = IndexedDocument::from_markup(PAGE).unwrap();
        let filled = fill_in_place(&mut doc, &MarkdownRenderer::new()).unwrap();
        assert_eq!(filled, 2);

        let first = doc.output(1).unwrap();
        assert!(first.contains("<h2>Report</h2>"));
        assert!(first.contains("<p>All good.</p>"));

        let second = doc.output(2).unwrap();
        assert!(second.contains("It's"));
        assert!(second.contains("\u{2713}"));
    }

    #[test]
    fn traversal_is_one_based_and_stops_at_the_first_gap() {
        let mut sources = IndexedDocument::new();
        sources.insert_source(2, "never reached").unwrap();
        let mut sink = IndexedDocument::new();
        sink.insert_output_slot(2);

        // No source at index 1, so nothing at all is filled.
        let filled = fill(&sources, &mut sink, &MarkdownRenderer::new()).unwrap();
        assert_eq!(filled, 0);
        assert_eq!(sink.output(2), Some(""));
    }

    #[test]
    fn rerunning_the_fill_is_stable() {
        // One decode pass per run over the *source* text, so a second run
        // reproduces the same output rather than decoding it further. The
        // source carries the Unicode token for a backslash followed by `n`,
        // the quirk input that a repeated-substitution loop would mangle.
        let mut sources = IndexedDocument::new();
        sources
            .insert_source(1, format!("{}n stays a newline", unicode_token("005c")))
            .unwrap();
        let mut sink = IndexedDocument::new();
        sink.insert_output_slot(1);

        let renderer = PlainRenderer;
        fill(&sources, &mut sink, &renderer).unwrap();
        let first_run = sink.output(1).unwrap().to_string();
        fill(&sources, &mut sink, &renderer).unwrap();
        assert_eq!(sink.output(1), Some(first_run.as_str()));
        assert_eq!(first_run, "<br />\n stays a newline");
    }

    #[test]
    fn missing_output_slot_stops_the_run_with_an_error() {
        let mut doc = IndexedDocument::new();
        doc.insert_source(1, "first").unwrap();
        doc.insert_output_slot(1);
        doc.insert_source(2, "second, but no slot").unwrap();

        let err = fill_in_place(&mut doc, &MarkdownRenderer::new()).unwrap_err();
        assert!(matches!(err, DocumentError::MissingOutput { index: 2 }));
        // The slot before the failure was already filled.
        assert!(doc.output(1).unwrap().contains("first"));
    }

    #[test]
    fn decoder_and_renderer_compose_the_way_the_page_needs() {
        let raw = format!(r#"A \"quoted\" caf{} <line>\nsecond line"#, unicode_token("00e9"));
        let decoded = decode_escapes(&raw);
        assert_eq!(decoded, "A \"quoted\" café <line>\nsecond line");
        let html = PlainRenderer.render(&decoded);
        assert_eq!(html, "A \"quoted\" café &lt;line&gt;<br />\nsecond line");
    }
}
