use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TIME_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})(?::([0-9]{2}))?$").unwrap());
static TIME_IN_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{1,2}):([0-9]{2})(?::([0-9]{2}))?").unwrap());

/// A duration token found somewhere inside a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationToken {
    pub range: Range<usize>,
    pub seconds: u32,
}

/// Parses a line that is nothing but a `M:SS`, `MM:SS` or `H:MM:SS` token.
pub fn parse_token(text: &str) -> Option<u32> {
    TIME_ONLY.captures(text).and_then(|caps| seconds_of(&caps))
}

/// Finds the first duration token in `line`.
pub fn find_token(line: &str) -> Option<DurationToken> {
    let caps = TIME_IN_LINE.captures(line)?;
    let whole = caps.get(0)?;
    Some(DurationToken {
        range: whole.range(),
        seconds: seconds_of(&caps)?,
    })
}

pub fn contains_token(line: &str) -> bool {
    TIME_IN_LINE.is_match(line)
}

fn seconds_of(caps: &Captures) -> Option<u32> {
    let field = |i: usize| caps.get(i).map(|m| m.as_str().parse::<u32>());
    let first = field(1)?.ok()?;
    let second = field(2)?.ok()?;
    match field(3) {
        // H:MM:SS
        Some(third) => Some((first * 60 + second) * 60 + third.ok()?),
        None => Some(first * 60 + second),
    }
}

/// Renders seconds as `M:SS`, or `H:MM:SS` from one hour up.
pub fn format_seconds(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
