//! Validated generation configuration.

use crate::error::SpecError;

/// Immutable description of the candidate space to enumerate.
///
/// When `patterns` is present it takes exclusive precedence over the
/// `min_length..=max_length` range; the two modes are never combined for a
/// single candidate.
#[derive(Debug, Clone)]
pub struct GenerationSpec {
    /// Working alphabet for range mode and for pattern fallback tokens.
    /// Order-preserving; duplicate symbols widen the radix.
    pub charset: Vec<char>,
    pub min_length: usize,
    pub max_length: usize,
    /// Pattern strings, enumerated in the order supplied.
    pub patterns: Option<Vec<String>>,
    /// Word list backing the 'w' pattern token.
    pub words: Vec<String>,
}

impl GenerationSpec {
    /// Check the spec before any enumeration begins.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.min_length > self.max_length {
            return Err(SpecError::LengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }

        match &self.patterns {
            Some(patterns) => {
                // 'w' has no silent fallback; every other unknown token
                // falls back to the charset during resolution.
                let wants_words = patterns
                    .iter()
                    .any(|pattern| pattern.chars().any(|token| token == 'w'));
                if wants_words && self.words.is_empty() {
                    return Err(SpecError::MissingWordList);
                }
            }
            None => {
                if self.charset.is_empty() {
                    return Err(SpecError::EmptyCharset);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_spec(charset: &str, min: usize, max: usize) -> GenerationSpec {
        GenerationSpec {
            charset: charset.chars().collect(),
            min_length: min,
            max_length: max,
            patterns: None,
            words: Vec::new(),
        }
    }

    #[test]
    fn test_valid_range_spec() {
        assert!(range_spec("ab", 1, 3).validate().is_ok());
    }

    #[test]
    fn test_empty_charset_rejected() {
        assert_eq!(range_spec("", 1, 3).validate(), Err(SpecError::EmptyCharset));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(
            range_spec("ab", 4, 2).validate(),
            Err(SpecError::LengthRange { min: 4, max: 2 })
        );
    }

    #[test]
    fn test_patterns_allow_empty_charset() {
        let spec = GenerationSpec {
            patterns: Some(vec!["ld".to_string()]),
            ..range_spec("", 0, 0)
        };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_word_token_requires_words() {
        let mut spec = GenerationSpec {
            patterns: Some(vec!["wd".to_string()]),
            ..range_spec("ab", 1, 2)
        };
        assert_eq!(spec.validate(), Err(SpecError::MissingWordList));

        spec.words = vec!["admin".to_string()];
        assert!(spec.validate().is_ok());
    }
}
