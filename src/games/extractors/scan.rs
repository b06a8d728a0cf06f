//! Small text-scanning helpers shared by the extractors.

/// Splits `text` into its leading run of ASCII digits and the remainder.
pub(crate) fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Parses a digit run as base-10; empty or overflowing runs yield `None`.
pub(crate) fn parse_number(digits: &str) -> Option<i32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Positions at which `keyword` occurs as a standalone word start.
pub(crate) fn keyword_positions<'a>(
    text: &'a str,
    keyword: &'a str,
) -> impl Iterator<Item = usize> + 'a {
    text.match_indices(keyword)
        .map(|(idx, _)| idx)
        .filter(move |idx| {
            !text[..*idx]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric())
        })
}

/// Finds `keyword` followed by optional whitespace and `#`, returning the text after `#`.
pub(crate) fn find_numbered_header<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    keyword_positions(text, keyword).find_map(|idx| {
        text[idx + keyword.len()..].trim_start().strip_prefix('#')
    })
}

/// Parses `"<M>:<S>"` at the start of `text`.
///
/// Returns the minutes, the seconds and the unconsumed text; either number is
/// `None` when absent or unparsable.
pub(crate) fn split_clock(text: &str) -> (Option<i32>, Option<i32>, &str) {
    let (minute_digits, rest) = split_digits(text);
    let minutes = parse_number(minute_digits);
    match rest.strip_prefix(':') {
        Some(after_colon) => {
            let (second_digits, rest) = split_digits(after_colon);
            (minutes, parse_number(second_digits), rest)
        }
        None => (minutes, None, rest),
    }
}

/// `minutes * 60 + seconds`, or `None` if it does not fit.
pub(crate) fn clock_seconds(minutes: i32, seconds: i32) -> Option<i32> {
    minutes.checked_mul(60)?.checked_add(seconds)
}
