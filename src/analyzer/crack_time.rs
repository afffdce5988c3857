// src/analyzer/crack_time.rs

/// Guesses per second assumed for an offline attacker.
pub const GUESSES_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const MILLENNIUM: f64 = 31_536_000_000.0;

/// Size of the alphabet implied by the character classes present.
pub fn charset_size(lower: bool, upper: bool, digits: bool, symbols: bool) -> u32 {
    let mut size = 0;
    if lower {
        size += 26;
    }
    if upper {
        size += 26;
    }
    if digits {
        size += 10;
    }
    if symbols {
        size += 32;
    }
    size
}

/// Bits of entropy, `length * log2(charset)`. An empty charset yields 0.
pub fn entropy_bits(charset: u32, length: usize) -> f64 {
    if charset == 0 || length == 0 {
        return 0.0;
    }
    length as f64 * f64::from(charset).log2()
}

/// Expected seconds to find the password, averaging half the keyspace.
pub fn crack_seconds(charset: u32, length: usize) -> f64 {
    if charset == 0 {
        return 0.0;
    }
    let combinations = f64::from(charset).powf(length as f64);
    combinations / (2.0 * GUESSES_PER_SECOND)
}

pub fn format_crack_time(seconds: f64) -> String {
    if seconds < 1.0 {
        "Instantly".to_string()
    } else if seconds < MINUTE {
        format!("{} seconds", seconds.round())
    } else if seconds < HOUR {
        format!("{} minutes", (seconds / MINUTE).round())
    } else if seconds < DAY {
        format!("{} hours", (seconds / HOUR).round())
    } else if seconds < YEAR {
        format!("{} days", (seconds / DAY).round())
    } else if seconds < MILLENNIUM {
        format!("{} years", (seconds / YEAR).round())
    } else {
        "Centuries".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_sums_present_classes() {
        assert_eq!(charset_size(true, true, true, true), 94);
        assert_eq!(charset_size(true, false, true, false), 36);
        assert_eq!(charset_size(false, false, false, false), 0);
    }

    #[test]
    fn empty_charset_has_no_entropy() {
        assert_eq!(entropy_bits(0, 12), 0.0);
        assert_eq!(crack_seconds(0, 12), 0.0);
    }

    #[test]
    fn entropy_matches_length_times_log2() {
        assert_eq!(entropy_bits(26, 8).round(), 38.0);
        assert_eq!(entropy_bits(94, 18).round(), 118.0);
    }

    #[test]
    fn huge_keyspace_is_centuries() {
        assert_eq!(format_crack_time(crack_seconds(94, 500)), "Centuries");
    }

    #[test]
    fn formats_each_unit() {
        assert_eq!(format_crack_time(0.4), "Instantly");
        assert_eq!(format_crack_time(1.0), "1 seconds");
        assert_eq!(format_crack_time(59.4), "59 seconds");
        assert_eq!(format_crack_time(90.0), "2 minutes");
        assert_eq!(format_crack_time(7_200.0), "2 hours");
        assert_eq!(format_crack_time(3.0 * 86_400.0), "3 days");
        assert_eq!(format_crack_time(10.0 * 31_536_000.0), "10 years");
        assert_eq!(format_crack_time(31_536_000_000.0), "Centuries");
    }

    #[test]
    fn lowercase_eight_chars_cracks_in_minutes() {
        // 26^8 / 2e9 = 104.4s
        assert_eq!(format_crack_time(crack_seconds(26, 8)), "2 minutes");
    }
}
