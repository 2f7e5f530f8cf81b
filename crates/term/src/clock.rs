//! Human-readable durations for the header clock and the victory message.

use std::time::Duration;

/// `MM:SS`, or `HH:MM:SS` once at least an hour has passed.
pub fn format_clock(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// e.g. `1 hour 2 minutes 5 seconds`; zero components are skipped.
pub fn duration_in_words(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let parts = [
        (total / 3600, "hour"),
        ((total / 60) % 60, "minute"),
        (total % 60, "second"),
    ];

    let words: Vec<String> = parts
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|&(n, unit)| {
            if n == 1 {
                format!("{} {}", n, unit)
            } else {
                format!("{} {}s", n, unit)
            }
        })
        .collect();

    if words.is_empty() {
        "0 seconds".to_string()
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_under_an_hour() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_millis(59_999)), "00:59");
        assert_eq!(format_clock(Duration::from_secs(61)), "01:01");
        assert_eq!(format_clock(Duration::from_secs(3599)), "59:59");
    }

    #[test]
    fn clock_switches_to_hours() {
        assert_eq!(format_clock(Duration::from_secs(3600)), "01:00:00");
        assert_eq!(format_clock(Duration::from_secs(3600 + 62)), "01:01:02");
        assert_eq!(format_clock(Duration::from_secs(26 * 3600)), "26:00:00");
    }

    #[test]
    fn words() {
        assert_eq!(duration_in_words(Duration::ZERO), "0 seconds");
        assert_eq!(duration_in_words(Duration::from_secs(1)), "1 second");
        assert_eq!(duration_in_words(Duration::from_secs(65)), "1 minute 5 seconds");
        assert_eq!(duration_in_words(Duration::from_secs(120)), "2 minutes");
        assert_eq!(
            duration_in_words(Duration::from_secs(3600 + 2 * 60 + 1)),
            "1 hour 2 minutes 1 second"
        );
    }
}
