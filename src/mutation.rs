/*!
 * Smart mutation of base candidates
 *
 * Expands one candidate into a fixed, ordered set of variants covering the
 * case/order/noise transforms people actually apply to passwords. The set
 * is intentionally not deduplicated: a word whose variants coincide is
 * written as many times as the set implies.
 */

use rand::Rng;

/// Number of variants produced per candidate.
pub const MUTATIONS_PER_WORD: usize = 7;

/// Derive the 7 variants of `word`, in fixed order:
///
/// 1. unchanged
/// 2. first character uppercased, rest untouched
/// 3. fully uppercased
/// 4. fully lowercased
/// 5. reversed
/// 6. suffixed with a random integer in 0..=9999 (no zero padding)
/// 7. each character uppercased independently with probability 0.7
///
/// Entries 6 and 7 draw from `rng` in that order; tests inject a seeded
/// source to pin them down.
pub fn smart_mutations<R: Rng>(word: &str, rng: &mut R) -> Vec<String> {
    let suffixed = format!("{}{}", word, rng.gen_range(0..=9999));

    let mut noisy = String::with_capacity(word.len());
    for c in word.chars() {
        if rng.gen_bool(0.7) {
            noisy.extend(c.to_uppercase());
        } else {
            noisy.push(c);
        }
    }

    vec![
        word.to_string(),
        capitalize(word),
        word.to_uppercase(),
        word.to_lowercase(),
        word.chars().rev().collect(),
        suffixed,
        noisy,
    ]
}

/// Uppercase only the first character; the rest keep their case.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_deterministic_entries() {
        let mutations = smart_mutations("Test", &mut rng());
        assert_eq!(mutations.len(), MUTATIONS_PER_WORD);
        assert_eq!(mutations[..5], ["Test", "Test", "TEST", "test", "tseT"]);
    }

    #[test]
    fn test_capitalize_only_forces_first_character() {
        let mutations = smart_mutations("tEST", &mut rng());
        assert_eq!(mutations[1], "TEST");

        let mutations = smart_mutations("hello world", &mut rng());
        assert_eq!(mutations[1], "Hello world");
    }

    #[test]
    fn test_empty_word() {
        let mutations = smart_mutations("", &mut rng());
        assert_eq!(mutations.len(), MUTATIONS_PER_WORD);
        assert_eq!(mutations[..5], ["", "", "", "", ""]);
        // Entry 6 is just the random suffix.
        assert!(mutations[5].parse::<u32>().is_ok());
        assert_eq!(mutations[6], "");
    }

    #[test]
    fn test_random_suffix_structure() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mutations = smart_mutations("Test", &mut rng);
            let suffix = mutations[5].strip_prefix("Test").unwrap();
            let value: u32 = suffix.parse().unwrap();
            assert!(value <= 9999);
            // No zero padding.
            assert_eq!(suffix, value.to_string());
        }
    }

    #[test]
    fn test_noisy_variant_structure() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mutations = smart_mutations("passw0rd", &mut rng);
            let noisy = &mutations[6];
            assert_eq!(noisy.chars().count(), 8);
            for (out, orig) in noisy.chars().zip("passw0rd".chars()) {
                assert!(out == orig || orig.to_uppercase().next() == Some(out));
            }
        }
    }

    #[test]
    fn test_seeded_source_reproduces_exactly() {
        let first = smart_mutations("Test", &mut rng());
        let second = smart_mutations("Test", &mut rng());
        assert_eq!(first, second);
    }
}
