//! Character set assembly for range-mode generation.

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// ASCII punctuation characters.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Which character classes to include in the working charset.
#[derive(Debug, Clone, Default)]
pub struct CharsetOptions {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub punctuation: bool,
    pub custom: Option<String>,
}

/// Build the working charset from the selected classes.
///
/// Classes are appended in a fixed order (lowercase, uppercase, digits,
/// punctuation, custom) and symbol order is preserved. Duplicates are kept:
/// a symbol listed twice widens the radix twice, exactly as if the caller
/// had typed it twice.
pub fn build(options: &CharsetOptions) -> Vec<char> {
    let mut charset = Vec::new();

    if options.lowercase {
        charset.extend(LOWERCASE.chars());
    }
    if options.uppercase {
        charset.extend(UPPERCASE.chars());
    }
    if options.digits {
        charset.extend(DIGITS.chars());
    }
    if options.punctuation {
        charset.extend(PUNCTUATION.chars());
    }
    if let Some(custom) = &options.custom {
        charset.extend(custom.chars());
    }

    charset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(PUNCTUATION.len(), 32);
    }

    #[test]
    fn test_build_order() {
        let options = CharsetOptions {
            lowercase: true,
            digits: true,
            custom: Some("xy".to_string()),
            ..Default::default()
        };
        let charset = build(&options);

        assert_eq!(charset.len(), 26 + 10 + 2);
        assert_eq!(charset[0], 'a');
        assert_eq!(charset[26], '0');
        assert_eq!(charset[36], 'x');
        assert_eq!(charset[37], 'y');
    }

    #[test]
    fn test_build_empty() {
        assert!(build(&CharsetOptions::default()).is_empty());
    }

    #[test]
    fn test_duplicates_kept() {
        let options = CharsetOptions {
            digits: true,
            custom: Some("09".to_string()),
            ..Default::default()
        };
        assert_eq!(build(&options).len(), 12);
    }
}
