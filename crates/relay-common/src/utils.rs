//! Shared utility functions.

use std::time::Duration;

/// Formats an elapsed duration as `H:MM:SS`, dropping fractional seconds.
///
/// Hours are not wrapped into days, so a long run renders as `26:00:00`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

/// Formats a retry delay in seconds with two decimals.
#[must_use]
pub fn format_retry_after(remaining: Duration) -> String {
    format!("{:.2}", remaining.as_secs_f64())
}

/// Truncates a string to at most `max_chars` characters, ending with an
/// ellipsis when anything was cut.
///
/// Counts `char`s rather than bytes so multi-byte text never splits.
#[must_use]
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let kept: String = input.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "0:00:01");
        assert_eq!(format_elapsed(Duration::from_secs(75)), "0:01:15");
        assert_eq!(format_elapsed(Duration::from_secs(3 * 3600 + 5)), "3:00:05");
        assert_eq!(format_elapsed(Duration::from_secs(26 * 3600)), "26:00:00");
    }

    #[test]
    fn test_format_retry_after() {
        assert_eq!(format_retry_after(Duration::from_secs(20)), "20.00");
        assert_eq!(format_retry_after(Duration::from_millis(4_300)), "4.30");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("Short", 20), "Short");
        assert_eq!(truncate_chars("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_chars("ééééé", 5), "ééééé");
        assert_eq!(truncate_chars("éééééé", 3).chars().count(), 3);
    }
}
