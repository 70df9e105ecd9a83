//! Interpretation of "posted N units ago" text.

use std::cmp::Ordering;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Minutes since a job was posted.
///
/// `Unknown` stands in for a value that did not start with an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostedMinutes {
    Known(i64),
    Unknown,
}

impl PostedMinutes {
    pub fn value(self) -> Option<i64> {
        match self {
            PostedMinutes::Known(minutes) => Some(minutes),
            PostedMinutes::Unknown => None,
        }
    }

    /// Orders known values by `ascending`; `Unknown` always comes last.
    pub(crate) fn sort_order(self, other: Self, ascending: bool) -> Ordering {
        match (self, other) {
            (PostedMinutes::Known(a), PostedMinutes::Known(b)) => {
                if ascending {
                    a.cmp(&b)
                } else {
                    b.cmp(&a)
                }
            }
            (PostedMinutes::Known(_), PostedMinutes::Unknown) => Ordering::Less,
            (PostedMinutes::Unknown, PostedMinutes::Known(_)) => Ordering::Greater,
            (PostedMinutes::Unknown, PostedMinutes::Unknown) => Ordering::Equal,
        }
    }
}

/// Converts text such as `"3 hours"` into minutes.
///
/// A unit containing "minute" counts 1, one containing "hour" counts 60, and
/// anything else (including a missing unit) counts as days.
pub fn parse_to_minutes(posted: &str) -> PostedMinutes {
    let (value, unit) = split_posted(posted);
    match leading_integer(value) {
        Some(count) => PostedMinutes::Known(count.saturating_mul(unit_multiplier(unit))),
        None => PostedMinutes::Unknown,
    }
}

/// Formats posted text for display, appending `s` to the unit when the count
/// is above one.
///
/// A unit that already ends in `s` is left alone.
pub fn format_for_display(posted: &str) -> String {
    let (value, unit) = split_posted(posted);
    let plural = matches!(leading_integer(value), Some(count) if count > 1)
        && !unit.is_empty()
        && !unit.ends_with('s');
    let suffix = if plural { "s" } else { "" };
    format!("{value} {unit}{suffix}")
}

fn split_posted(posted: &str) -> (&str, &str) {
    let mut parts = posted.split_whitespace();
    let value = parts.next().unwrap_or("");
    let unit = parts.next().unwrap_or("");
    (value, unit)
}

fn unit_multiplier(unit: &str) -> i64 {
    if unit.contains("minute") {
        1
    } else if unit.contains("hour") {
        MINUTES_PER_HOUR
    } else {
        MINUTES_PER_DAY
    }
}

/// Lenient integer read: optional sign, then leading digits. Trailing text is
/// ignored, so `"3.5"` reads as 3.
fn leading_integer(text: &str) -> Option<i64> {
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Only overflow can fail here.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integer_ignores_trailing_text() {
        assert_eq!(leading_integer("3.5"), Some(3));
        assert_eq!(leading_integer("12abc"), Some(12));
        assert_eq!(leading_integer("-4"), Some(-4));
        assert_eq!(leading_integer("+7"), Some(7));
    }

    #[test]
    fn leading_integer_rejects_text_without_digits() {
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("few"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(".5"), None);
    }

    #[test]
    fn leading_integer_saturates_on_overflow() {
        assert_eq!(leading_integer("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn split_takes_first_two_tokens() {
        assert_eq!(split_posted("3 hours ago"), ("3", "hours"));
        assert_eq!(split_posted("  5   days "), ("5", "days"));
        assert_eq!(split_posted("now"), ("now", ""));
    }

    #[test]
    fn unknown_sorts_after_known_in_both_directions() {
        let known = PostedMinutes::Known(10);
        let unknown = PostedMinutes::Unknown;
        assert_eq!(known.sort_order(unknown, true), Ordering::Less);
        assert_eq!(known.sort_order(unknown, false), Ordering::Less);
        assert_eq!(unknown.sort_order(unknown, true), Ordering::Equal);
    }
}
