use std::borrow::Cow;

use regex::Captures;

use crate::parse::pattern::UNICODE_ESCAPE;

/// Decode the backslash escape sequences used by serialized message text.
///
/// Three kinds of escape token are recognized: `\uXXXX` (exactly four hex
/// digits, any case), `\n`, and the quote escapes `\'` and `\"`. Anything
/// else, including partial tokens like `\u004`, passes through unchanged, so
/// decoding is total and never fails. There is no `\\` escape; a literal
/// backslash is never specially consumed.
///
/// The Unicode substitution runs first, then the fixed literal sequences are
/// rewritten in a single lexical pass each. The order is observable: an
/// escaped backslash such as `\` followed by a literal `n` forms a
/// `\` + `n` pair that the later pass turns into a real newline. Callers
/// relying on serialized content must get that exact behavior, so do not
/// reorder the passes or re-run them to a fixed point.
pub fn decode_escapes(input: &str) -> Cow<'_, str> {
    if !input.contains('\\') {
        return Cow::Borrowed(input);
    }
    let decoded = UNICODE_ESCAPE
        .get_regex()
        .replace_all(input, |caps: &Captures<'_>| {
            // Four hex digits always parse; surrogate code points are not
            // scalar values and leave the token untouched.
            match u32::from_str_radix(&caps["hex"], 16)
                .ok()
                .and_then(char::from_u32)
            {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        });
    Cow::Owned(
        decoded
            .replace("\\n", "\n")
            .replace("\\'", "'")
            .replace("\\\"", "\""),
    )
}
