// src/analyzer/patterns.rs
use lazy_static::lazy_static;
use regex::RegexSet;

/// Characters counted as symbols for scoring and the requirements checklist.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const KEYBOARD_PATTERNS: [&str; 5] = ["qwerty", "asdfgh", "zxcvbn", "12345", "54321"];

pub const COMMON_PASSWORDS: [&str; 18] = [
    "password", "123456", "123456789", "12345678", "12345", "1234567",
    "qwerty", "abc123", "password123", "admin", "letmein", "welcome",
    "monkey", "1234567890", "iloveyou", "princess", "dragon", "sunshine",
];

const ALPHA_SEQUENCE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGIT_SEQUENCE: &str = "1234567890";

lazy_static! {
    // Every 3-char window of the alphabet and of "1234567890" (so "890" wraps).
    static ref SEQUENCES: Vec<String> = {
        let mut windows = Vec::new();
        for table in [ALPHA_SEQUENCE, DIGIT_SEQUENCE] {
            let chars: Vec<char> = table.chars().collect();
            for window in chars.windows(3) {
                windows.push(window.iter().collect());
            }
        }
        windows
    };

    static ref PERSONAL_PATTERNS: RegexSet = RegexSet::new([
        r"(?i)birthday",
        r"(?i)name",
        r"(?i)phone",
        r"(?i)address",
        r"(?i)email",
        r"(?i)username",
        r"(?i)user",
        r"(?i)admin",
        r"(?i)login",
        r"(?i)welcome",
        r"(?i)hello",
        r"(?i)love",
    ])
    .expect("personal pattern table is valid");
}

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Three or more identical characters in a row.
pub fn has_repeated_run(password: &str) -> bool {
    let mut run = 0;
    let mut prev = None;
    for c in password.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
            prev = Some(c);
        }
    }
    false
}

pub fn has_sequential_run(password: &str) -> bool {
    let lower = password.to_lowercase();
    SEQUENCES.iter().any(|seq| lower.contains(seq.as_str()))
}

pub fn has_keyboard_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();
    KEYBOARD_PATTERNS.iter().any(|pattern| lower.contains(pattern))
}

/// Matches when the password contains a common entry or a common entry contains
/// the password. The second direction means any fragment of a listed password
/// (including the empty string) counts as common.
pub fn is_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    COMMON_PASSWORDS
        .iter()
        .any(|common| lower.contains(common) || common.contains(lower.as_str()))
}

pub fn has_personal_info(password: &str) -> bool {
    PERSONAL_PATTERNS.is_match(password)
}
