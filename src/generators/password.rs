// src/generators/password.rs
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::analyzer::{self, patterns::SYMBOLS, PasswordAnalysis};

pub const MIN_GENERATED_LENGTH: usize = 4;
pub const MAX_GENERATED_LENGTH: usize = 128;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SIMILAR: &str = "il1Lo0O";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be between {min} and {max} characters, got {got}")]
    InvalidLength { min: usize, max: usize, got: usize },

    #[error("At least one character type must be included")]
    NoCharacterClasses,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
        }
    }
}

impl GeneratorOptions {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(MIN_GENERATED_LENGTH..=MAX_GENERATED_LENGTH).contains(&self.length) {
            return Err(GeneratorError::InvalidLength {
                min: MIN_GENERATED_LENGTH,
                max: MAX_GENERATED_LENGTH,
                got: self.length,
            });
        }
        if !self.include_uppercase
            && !self.include_lowercase
            && !self.include_numbers
            && !self.include_symbols
        {
            return Err(GeneratorError::NoCharacterClasses);
        }
        Ok(())
    }

    // One pool per enabled class, with look-alikes stripped when requested
    fn pools(&self) -> Vec<Vec<char>> {
        [
            (self.include_lowercase, LOWERCASE),
            (self.include_uppercase, UPPERCASE),
            (self.include_numbers, DIGITS),
            (self.include_symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, set)| {
            set.chars()
                .filter(|c| !(self.exclude_similar && SIMILAR.contains(*c)))
                .collect::<Vec<char>>()
        })
        .filter(|pool| !pool.is_empty())
        .collect()
    }
}

/// A generated password together with its strength analysis.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub analysis: PasswordAnalysis,
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &GeneratorOptions) -> Result<String, GeneratorError> {
        options.validate()?;

        let pools = options.pools();
        let alphabet: Vec<char> = pools.iter().flatten().copied().collect();
        let mut rng = rand::thread_rng();

        // Seed one character from each class, fill the rest, then shuffle so
        // the guaranteed characters don't sit at the front.
        let mut chars: Vec<char> = pools
            .iter()
            .filter_map(|pool| pool.choose(&mut rng).copied())
            .take(options.length)
            .collect();
        while chars.len() < options.length {
            chars.push(alphabet[rng.gen_range(0..alphabet.len())]);
        }
        chars.shuffle(&mut rng);

        Ok(chars.into_iter().collect())
    }

    pub fn generate_and_analyze(&self, options: &GeneratorOptions) -> Result<GeneratedPassword, GeneratorError> {
        let password = self.generate_password(options)?;
        let analysis = analyzer::analyze(&password);
        log::debug!(
            "Generated {}-character password rated {}",
            options.length,
            analysis.strength
        );
        Ok(GeneratedPassword { password, analysis })
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        let generator = PasswordGenerator::new();
        for length in [4, 16, 64, 128] {
            let options = GeneratorOptions { length, ..Default::default() };
            let password = generator.generate_password(&options).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn includes_every_enabled_class() {
        let generator = PasswordGenerator::new();
        let options = GeneratorOptions::default();
        for _ in 0..50 {
            let analysis = analyzer::analyze(&generator.generate_password(&options).unwrap());
            assert!(analysis.requirements.lowercase);
            assert!(analysis.requirements.uppercase);
            assert!(analysis.requirements.numbers);
            assert!(analysis.requirements.symbols);
        }
    }

    #[test]
    fn respects_disabled_classes() {
        let generator = PasswordGenerator::new();
        let options = GeneratorOptions {
            include_uppercase: false,
            include_symbols: false,
            ..Default::default()
        };
        let password = generator.generate_password(&options).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn excludes_similar_characters() {
        let generator = PasswordGenerator::new();
        let options = GeneratorOptions {
            length: 128,
            exclude_similar: true,
            ..Default::default()
        };
        let password = generator.generate_password(&options).unwrap();
        assert!(!password.chars().any(|c| SIMILAR.contains(c)));
    }

    #[test]
    fn rejects_invalid_options() {
        let generator = PasswordGenerator::new();
        let too_short = GeneratorOptions { length: 3, ..Default::default() };
        assert_eq!(
            generator.generate_password(&too_short),
            Err(GeneratorError::InvalidLength { min: 4, max: 128, got: 3 })
        );

        let empty = GeneratorOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        };
        assert_eq!(
            generator.generate_password(&empty),
            Err(GeneratorError::NoCharacterClasses)
        );
    }

    #[test]
    fn generated_password_is_analyzed() {
        let generated = PasswordGenerator::new()
            .generate_and_analyze(&GeneratorOptions::default())
            .unwrap();
        assert_eq!(generated.analysis, analyzer::analyze(&generated.password));
    }
}
