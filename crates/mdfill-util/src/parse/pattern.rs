use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Simplify static Pattern creation boiler plate; lazy construction once shared everywhere.
#[macro_export]
macro_rules! static_pattern {
    ($name:ident, $re:expr) => {
        pub static $name: Lazy<Pattern> = Lazy::new(|| Pattern::new(Cow::Borrowed($re)));
    };
}
#[macro_export]
macro_rules! static_pattern_owned {
    ($name:ident, $re:expr) => {
        pub static $name: Lazy<Pattern> = Lazy::new(|| Pattern::new(Cow::Owned($re)));
    };
}

// Static regex string patterns.
pub static _HEXADECIMAL_DIGIT: &str = r"[0-9A-Fa-f]";

// Cached compiled regex.
//
// A Unicode escape token is a backslash, a `u`, and exactly four hex digits.
// Fewer digits, or a non hex character in the four digit slot, is no match.
static_pattern_owned!(
    UNICODE_ESCAPE,
    String::from(r"\\u").append_named_capture(format!("{}{{4}}", _HEXADECIMAL_DIGIT), "hex")
);

pub struct Pattern {
    source: Cow<'static, str>,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: Cow<'static, str>) -> Self {
        let regex = Regex::new(source.as_ref())
            .unwrap_or_else(|e| panic!("Could not compile regex: {} cause: {}", source, e));
        Pattern { source, regex }
    }

    pub fn as_str(&self) -> &str {
        self.source.as_ref()
    }
    pub fn get_regex(&self) -> &Regex {
        &self.regex
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Writes the raw source string to the formatter
        write!(f, "{}", self.source)
    }
}

pub trait PatternOps: Sized + fmt::Display {
    fn append_pattern<T: AsRef<str>>(self, suffix: T) -> String;
    fn append_named_capture<T: AsRef<str>>(self, pattern: T, pattern_name: &'static str) -> String;
    /// A non capture group.
    fn make_pattern_group(self) -> String {
        format!("(?:{})", self)
    }
}

impl PatternOps for String {
    fn append_pattern<T: AsRef<str>>(mut self, suffix: T) -> String {
        let suffix_str = suffix.as_ref();
        self.push_str(suffix_str);
        self
    }

    fn append_named_capture<T: AsRef<str>>(
        mut self,
        pattern: T,
        pattern_name: &'static str,
    ) -> String {
        let named_group_exp = format!("(?P<{}>{})", pattern_name, pattern.as_ref());
        self.push_str(&named_group_exp);
        self
    }
}
