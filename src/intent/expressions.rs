//! Regex combinators used by the intent guards.

use regex::Regex;

/// Compiles a literal pattern once and yields a `&'static Regex`.
///
/// Patterns are string literals exercised by the guard tests, so an
/// invalid one fails the first test that touches it.
macro_rules! pattern {
    ($re:literal $(,)?) => {{
        #[allow(clippy::expect_used)]
        static RE: std::sync::LazyLock<::regex::Regex> =
            std::sync::LazyLock::new(|| ::regex::Regex::new($re).expect("invalid intent pattern"));
        &*RE
    }};
}

pub(crate) use pattern;

/// `true` if every expression matches.
#[must_use]
pub fn all_match(expressions: &[&Regex], text: &str) -> bool {
    expressions.iter().all(|re| re.is_match(text))
}

/// `true` if at least one expression matches.
#[must_use]
pub fn some_match(expressions: &[&Regex], text: &str) -> bool {
    expressions.iter().any(|re| re.is_match(text))
}

/// `true` if no expression matches.
#[must_use]
pub fn none_match(expressions: &[&Regex], text: &str) -> bool {
    !some_match(expressions, text)
}
