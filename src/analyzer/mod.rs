// src/analyzer/mod.rs
//! Rule-based password strength scoring.
//!
//! [`analyze`] is pure and total: every string, including the empty one, yields
//! a [`PasswordAnalysis`]. The score is built additively from length and
//! character classes, reduced by pattern penalties, scaled by a length
//! multiplier and finally clamped into `0..=MAX_SCORE`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod crack_time;
pub mod patterns;

pub const MAX_SCORE: u32 = 16;
pub const MAX_FEEDBACK: usize = 5;
/// Minimum length ticked on the requirements checklist.
pub const MIN_LENGTH: usize = 8;

pub const MSG_LENGTH: &str = "Use at least 8 characters (12+ recommended)";
pub const MSG_LOWERCASE: &str = "Add lowercase letters";
pub const MSG_UPPERCASE: &str = "Add uppercase letters";
pub const MSG_NUMBERS: &str = "Add numbers";
pub const MSG_SYMBOLS: &str = "Add special characters (!@#$%^&*)";
pub const MSG_REPEATED: &str = "Avoid repeated characters (aaa, 111)";
pub const MSG_SEQUENTIAL: &str = "Avoid sequential characters (abc, 123)";
pub const MSG_KEYBOARD: &str = "Avoid keyboard patterns (qwerty, 12345)";
pub const MSG_COMMON: &str = "Avoid common passwords or dictionary words";
pub const MSG_PERSONAL: &str = "Avoid personal information in passwords";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Strength {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Fair")]
    Fair,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=3 => Strength::VeryWeak,
            4..=6 => Strength::Weak,
            7..=9 => Strength::Fair,
            10..=12 => Strength::Good,
            13..=15 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    /// Display severity tag for UIs.
    pub fn color(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "red",
            Strength::Weak => "orange",
            Strength::Fair => "yellow",
            Strength::Good => "blue",
            Strength::Strong => "green",
            Strength::VeryStrong => "emerald",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Checklist shown next to the score; independent of the scoring tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub no_common: bool,
    pub no_personal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAnalysis {
    pub score: u32,
    pub strength: Strength,
    pub color: String,
    /// Estimated entropy in whole bits
    pub entropy: u32,
    pub time_to_crack: String,
    pub feedback: Vec<String>,
    pub requirements: Requirements,
}

#[derive(Debug, Clone, Copy, Default)]
struct CharacterClasses {
    lowercase: bool,
    uppercase: bool,
    numbers: bool,
    symbols: bool,
}

impl CharacterClasses {
    fn scan(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                classes.lowercase = true;
            } else if c.is_ascii_uppercase() {
                classes.uppercase = true;
            } else if c.is_ascii_digit() {
                classes.numbers = true;
            } else if patterns::is_symbol(c) {
                classes.symbols = true;
            }
        }
        classes
    }

    fn count(&self) -> usize {
        [self.lowercase, self.uppercase, self.numbers, self.symbols]
            .iter()
            .filter(|present| **present)
            .count()
    }

    fn charset_size(&self) -> u32 {
        crack_time::charset_size(self.lowercase, self.uppercase, self.numbers, self.symbols)
    }
}

/// Score a candidate password.
pub fn analyze(password: &str) -> PasswordAnalysis {
    let length = password.chars().count();
    let classes = CharacterClasses::scan(password);
    let mut score: i32 = 0;
    let mut feedback: Vec<String> = Vec::new();

    let multiplier = if length >= 16 {
        score += 3;
        1.2
    } else if length >= 12 {
        score += 2;
        1.1
    } else if length >= 8 {
        score += 1;
        1.0
    } else {
        feedback.push(MSG_LENGTH.to_string());
        1.0
    };

    for (present, points, message) in [
        (classes.lowercase, 1, MSG_LOWERCASE),
        (classes.uppercase, 1, MSG_UPPERCASE),
        (classes.numbers, 1, MSG_NUMBERS),
        (classes.symbols, 2, MSG_SYMBOLS),
    ] {
        if present {
            score += points;
        } else {
            feedback.push(message.to_string());
        }
    }

    match classes.count() {
        4 => score += 2,
        3 => score += 1,
        _ => {}
    }

    if patterns::has_repeated_run(password) {
        score -= 1;
        feedback.push(MSG_REPEATED.to_string());
    }
    if patterns::has_sequential_run(password) {
        score -= 1;
        feedback.push(MSG_SEQUENTIAL.to_string());
    }
    if patterns::has_keyboard_pattern(password) {
        score -= 2;
        feedback.push(MSG_KEYBOARD.to_string());
    }

    let common = patterns::is_common_password(password);
    if common {
        score -= 3;
        feedback.push(MSG_COMMON.to_string());
    }

    let personal = patterns::has_personal_info(password);
    if personal {
        score -= 2;
        feedback.push(MSG_PERSONAL.to_string());
    }

    // The tier is looked up before the display clamp.
    let scaled = (f64::from(score.max(0)) * multiplier).round() as u32;
    let strength = Strength::from_score(scaled);

    let charset = classes.charset_size();
    let entropy = crack_time::entropy_bits(charset, length).round() as u32;
    let time_to_crack = crack_time::format_crack_time(crack_time::crack_seconds(charset, length));

    feedback.truncate(MAX_FEEDBACK);

    PasswordAnalysis {
        score: scaled.min(MAX_SCORE),
        strength,
        color: strength.color().to_string(),
        entropy,
        time_to_crack,
        feedback,
        requirements: Requirements {
            length: length >= MIN_LENGTH,
            uppercase: classes.uppercase,
            lowercase: classes.lowercase,
            numbers: classes.numbers,
            symbols: classes.symbols,
            no_common: !common,
            no_personal: !personal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_very_weak() {
        let analysis = analyze("");
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.strength, Strength::VeryWeak);
        assert_eq!(analysis.entropy, 0);
        assert_eq!(analysis.time_to_crack, "Instantly");
        assert_eq!(analysis.feedback[0], MSG_LENGTH);
        assert_eq!(analysis.feedback.len(), MAX_FEEDBACK);
        assert!(!analysis.requirements.length);
    }

    #[test]
    fn common_password_scores_low() {
        let analysis = analyze("password");
        assert!(analysis.score <= 3);
        assert_eq!(analysis.strength, Strength::VeryWeak);
        assert!(!analysis.requirements.no_common);
        assert!(analysis.requirements.length);
        assert_eq!(
            analysis.feedback,
            vec![MSG_UPPERCASE, MSG_NUMBERS, MSG_SYMBOLS, MSG_COMMON]
        );
    }

    #[test]
    fn long_mixed_password_is_good() {
        let analysis = analyze("Tr0ub4dor&3xZq9!mK");
        // (3 + 1 + 1 + 1 + 2 + 2) * 1.2
        assert_eq!(analysis.score, 12);
        assert_eq!(analysis.strength, Strength::Good);
        assert_eq!(analysis.color, "blue");
        assert_eq!(analysis.entropy, 118);
        assert_eq!(analysis.time_to_crack, "Centuries");
        assert!(analysis.feedback.is_empty());
        assert!(analysis.requirements.no_common);
        assert!(analysis.requirements.no_personal);
    }

    #[test]
    fn repeats_are_not_sequences() {
        let analysis = analyze("aaa111");
        assert_eq!(analysis.score, 1);
        assert!(analysis.feedback.contains(&MSG_REPEATED.to_string()));
        assert!(!analysis.feedback.contains(&MSG_SEQUENTIAL.to_string()));
        assert_eq!(
            analysis.feedback,
            vec![MSG_LENGTH, MSG_UPPERCASE, MSG_SYMBOLS, MSG_REPEATED]
        );
    }

    #[test]
    fn sequential_and_keyboard_penalties_stack() {
        // 2 + 5 + 2, then "fgh" -1 and "asdfgh" -2
        let analysis = analyze("Zebra!9asdfgh");
        assert_eq!(analysis.score, 7); // round(6 * 1.1)
        assert_eq!(analysis.strength, Strength::Fair);
        assert_eq!(
            analysis.feedback,
            vec![MSG_SEQUENTIAL, MSG_KEYBOARD]
        );
    }

    #[test]
    fn personal_words_are_penalised() {
        let analysis = analyze("HelloThere#42");
        assert!(!analysis.requirements.no_personal);
        assert!(analysis.feedback.contains(&MSG_PERSONAL.to_string()));
    }

    #[test]
    fn unclassified_characters_have_no_charset() {
        let analysis = analyze("    ~~~~ \u{e9}\u{e9}");
        assert_eq!(analysis.entropy, 0);
        assert_eq!(analysis.time_to_crack, "Instantly");
        assert_eq!(analysis.score, 0);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let analysis = analyze("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}");
        assert!(!analysis.requirements.length);
        assert_eq!(analysis.feedback[0], MSG_LENGTH);
    }

    #[test]
    fn analysis_is_deterministic() {
        for password in ["", "password", "Tr0ub4dor&3xZq9!mK", "qwerty123", "\u{1f600}abc"] {
            assert_eq!(analyze(password), analyze(password));
        }
    }

    #[test]
    fn score_and_feedback_stay_bounded() {
        let long = "Aa1!".repeat(500);
        for password in ["", "a", "aaaa", "Qwerty!1", long.as_str(), "loveadminuser"] {
            let analysis = analyze(password);
            assert!(analysis.score <= MAX_SCORE);
            assert!(analysis.feedback.len() <= MAX_FEEDBACK);
        }
    }

    #[test]
    fn adding_missing_class_does_not_lower_score() {
        let base = analyze("zebrafin");
        let with_digit = analyze("zebrafi7");
        let longer = analyze("zebrafinx7");
        assert!(with_digit.score >= base.score);
        assert!(longer.score >= base.score);
    }

    #[test]
    fn strength_tiers_cover_boundaries() {
        assert_eq!(Strength::from_score(3), Strength::VeryWeak);
        assert_eq!(Strength::from_score(4), Strength::Weak);
        assert_eq!(Strength::from_score(9), Strength::Fair);
        assert_eq!(Strength::from_score(12), Strength::Good);
        assert_eq!(Strength::from_score(15), Strength::Strong);
        assert_eq!(Strength::from_score(17), Strength::VeryStrong);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let value = serde_json::to_value(analyze("Tr0ub4dor&3xZq9!mK")).unwrap();
        assert_eq!(value["strength"], "Good");
        assert_eq!(value["timeToCrack"], "Centuries");
        assert_eq!(value["requirements"]["noCommon"], true);
        assert_eq!(value["requirements"]["noPersonal"], true);
    }
}
