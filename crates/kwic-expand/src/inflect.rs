//! Pattern-level inflection of escaped terms.

/// Rewrites an escaped term into a pattern fragment that also matches inflected forms.
///
/// Implementations receive text that has already been escaped for the pattern engine and
/// may return pattern syntax.
pub trait Inflector: Send + Sync {
    /// Returns the pattern fragment for `escaped`.
    fn inflect(&self, escaped: &str) -> String;
}

/// Leaves terms untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInflection;

impl Inflector for NoInflection {
    fn inflect(&self, escaped: &str) -> String {
        escaped.to_string()
    }
}

/// Simple English plural handling plus legal citation symbols.
///
/// - `s12` also matches `§12`, `p4` also matches `¶4`
/// - `horse` and `horses` both match either form
///
/// Only a trailing `s` is considered, so irregular plurals such as "businesses" are not
/// covered.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl EnglishInflector {
    /// Widens a leading `s`/`p` before a digit to also accept the section/paragraph sign.
    fn citation_symbols(escaped: &str) -> String {
        let mut chars = escaped.chars();
        let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
            return escaped.to_string();
        };
        if !second.is_ascii_digit() {
            return escaped.to_string();
        }
        match first {
            's' => format!("(?:s|\u{a7}){}", &escaped[1..]),
            'p' => format!("(?:p|\u{b6}){}", &escaped[1..]),
            _ => escaped.to_string(),
        }
    }
}

impl Inflector for EnglishInflector {
    fn inflect(&self, escaped: &str) -> String {
        if escaped.chars().count() < 2 {
            return escaped.to_string();
        }

        let mut pattern = Self::citation_symbols(escaped);
        match pattern.chars().next_back() {
            // horses -> horses*, which still matches "horse"
            Some('s') => pattern.push('*'),
            Some(c) if c.is_alphabetic() => pattern.push_str("s*"),
            _ => {}
        }
        pattern
    }
}
