pub const KEY_SEPARATOR: &str = " + ";

/// Builds the order-independent key for a pair of skill titles.
///
/// Titles are compared with `str` ordering (Unicode scalar values), never
/// the process locale, so keys written in one session match in the next.
/// Titles that themselves contain `KEY_SEPARATOR` can collide.
pub fn canonical_key(first: &str, second: &str) -> String {
    let (low, high) = if first <= second {
        (first, second)
    } else {
        (second, first)
    };
    format!("{}{}{}", low, KEY_SEPARATOR, high)
}

#[cfg(test)]
#[path = "canonical_key_tests.rs"]
mod canonical_key_tests;
