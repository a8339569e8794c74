/*!
 * Combinatorial candidate enumeration
 *
 * Maps a validated `GenerationSpec` to a lazy, deterministically ordered
 * sequence of candidate strings:
 * - exact counting without enumeration
 * - O(length) random access via mixed-radix index decomposition
 * - cursor-based chunk extraction for parallel workers
 *
 * The candidate space is organized in tiers: one tier per length in range
 * mode, one tier per pattern in pattern mode. Within a tier, candidates are
 * ordered lexicographically by per-position alphabet order, with the
 * rightmost position cycling fastest.
 */

use std::sync::Arc;

use crate::charset::{DIGITS, LOWERCASE, PUNCTUATION, UPPERCASE};
use crate::error::{GeneratorError, SpecError};
use crate::spec::GenerationSpec;

/// Per-position alphabet. Symbols are strings so that word-list entries and
/// single characters share one representation.
type Alphabet = Arc<Vec<String>>;

/// One contiguous run of candidates sharing a shape: a single length in
/// range mode, or a single pattern in pattern mode.
#[derive(Debug)]
struct Tier {
    slots: Vec<Alphabet>,
    size: u128,
}

impl Tier {
    fn new(slots: Vec<Alphabet>) -> Result<Self, SpecError> {
        let size = slots
            .iter()
            .try_fold(1u128, |acc, slot| acc.checked_mul(slot.len() as u128))
            .ok_or(SpecError::TooManyCandidates)?;
        Ok(Self { slots, size })
    }
}

/// Lazy enumerator over the candidate space of a `GenerationSpec`.
#[derive(Debug)]
pub struct PasswordGenerator {
    tiers: Vec<Tier>,
    /// offsets[i] = flat index of the first candidate of tiers[i].
    offsets: Vec<u128>,
    total: u128,
}

impl PasswordGenerator {
    /// Resolve a spec into tiers. Validates the spec first; the only
    /// additional failure is a candidate space overflowing u128.
    pub fn from_spec(spec: &GenerationSpec) -> Result<Self, SpecError> {
        spec.validate()?;

        let charset: Alphabet = Arc::new(spec.charset.iter().map(|c| c.to_string()).collect());

        let tiers = match &spec.patterns {
            Some(patterns) => {
                let words: Alphabet = Arc::new(spec.words.clone());
                let lower = class_alphabet(LOWERCASE);
                let upper = class_alphabet(UPPERCASE);
                let digits = class_alphabet(DIGITS);
                let punct = class_alphabet(PUNCTUATION);

                patterns
                    .iter()
                    .map(|pattern| {
                        let slots = pattern
                            .chars()
                            .map(|token| match token {
                                'l' => lower.clone(),
                                'u' => upper.clone(),
                                'd' => digits.clone(),
                                's' => punct.clone(),
                                'w' => words.clone(),
                                // Unrecognized tokens fall back to the
                                // working charset (compatibility behavior).
                                _ => charset.clone(),
                            })
                            .collect();
                        Tier::new(slots)
                    })
                    .collect::<Result<Vec<_>, _>>()?
            }
            None => (spec.min_length..=spec.max_length)
                .map(|length| Tier::new(vec![charset.clone(); length]))
                .collect::<Result<Vec<_>, _>>()?,
        };

        let mut offsets = Vec::with_capacity(tiers.len());
        let mut total = 0u128;
        for tier in &tiers {
            offsets.push(total);
            total = total
                .checked_add(tier.size)
                .ok_or(SpecError::TooManyCandidates)?;
        }

        Ok(Self {
            tiers,
            offsets,
            total,
        })
    }

    /// Exact number of candidates the spec implies.
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Candidate at `index` in the global order, in O(length) time.
    pub fn nth(&self, index: u128) -> Result<String, GeneratorError> {
        let (tier, digits) = self.locate(index)?;
        Ok(self.render(tier, &digits))
    }

    /// Restartable lazy iterator over the full candidate space, in global
    /// order. Memory use is bounded by the longest tier, never by `total()`.
    pub fn iter(&self) -> Candidates<'_> {
        let mut cursor = Cursor {
            tier: 0,
            digits: self.tiers.first().map_or_else(Vec::new, |t| vec![0; t.slots.len()]),
        };
        self.skip_empty_tiers(&mut cursor);
        Candidates { gen: self, cursor }
    }

    /// The candidates at flat indices `[start, start + count)`, in global
    /// order. Seeds a cursor with one mixed-radix decode, then steps it, so
    /// the cost is one `nth` plus `count` odometer increments.
    pub fn chunk(&self, start: u128, count: u64) -> Result<Vec<String>, GeneratorError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let end = start
            .checked_add(count as u128)
            .filter(|&end| end <= self.total)
            .ok_or(GeneratorError::IndexOutOfRange {
                index: start.saturating_add(count as u128 - 1),
                total: self.total,
            })?;

        let (tier, digits) = self.locate(start)?;
        let mut cursor = Cursor { tier, digits };
        let mut out = Vec::with_capacity((end - start) as usize);
        for _ in start..end {
            out.push(self.render(cursor.tier, &cursor.digits));
            self.advance(&mut cursor);
        }
        Ok(out)
    }

    /// Find the tier holding `index` (prefix-sum lookup) and decode the
    /// residual offset into per-position symbol choices.
    fn locate(&self, index: u128) -> Result<(usize, Vec<usize>), GeneratorError> {
        if index >= self.total {
            return Err(GeneratorError::IndexOutOfRange {
                index,
                total: self.total,
            });
        }

        // Last tier whose first index is <= index; empty tiers share an
        // offset with their successor and are skipped by taking the last.
        let tier = self.offsets.partition_point(|&offset| offset <= index) - 1;

        let slots = &self.tiers[tier].slots;
        let mut rem = index - self.offsets[tier];
        let mut digits = vec![0usize; slots.len()];
        for (digit, slot) in digits.iter_mut().zip(slots).rev() {
            let radix = slot.len() as u128;
            *digit = (rem % radix) as usize;
            rem /= radix;
        }

        Ok((tier, digits))
    }

    fn render(&self, tier: usize, digits: &[usize]) -> String {
        let slots = &self.tiers[tier].slots;
        let mut out = String::new();
        for (slot, &digit) in slots.iter().zip(digits) {
            out.push_str(&slot[digit]);
        }
        out
    }

    /// Odometer increment: rightmost position cycles fastest; a carry out of
    /// position 0 moves to the next non-empty tier.
    fn advance(&self, cursor: &mut Cursor) {
        let slots = &self.tiers[cursor.tier].slots;
        for (digit, slot) in cursor.digits.iter_mut().zip(slots).rev() {
            *digit += 1;
            if *digit < slot.len() {
                return;
            }
            *digit = 0;
        }

        cursor.tier += 1;
        if let Some(tier) = self.tiers.get(cursor.tier) {
            cursor.digits = vec![0; tier.slots.len()];
        }
        self.skip_empty_tiers(cursor);
    }

    fn skip_empty_tiers(&self, cursor: &mut Cursor) {
        while let Some(tier) = self.tiers.get(cursor.tier) {
            if tier.size > 0 {
                return;
            }
            cursor.tier += 1;
            if let Some(next) = self.tiers.get(cursor.tier) {
                cursor.digits = vec![0; next.slots.len()];
            }
        }
    }
}

/// Position of the next candidate to emit.
struct Cursor {
    tier: usize,
    digits: Vec<usize>,
}

/// Iterator returned by [`PasswordGenerator::iter`].
pub struct Candidates<'a> {
    gen: &'a PasswordGenerator,
    cursor: Cursor,
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.cursor.tier >= self.gen.tiers.len() {
            return None;
        }
        let candidate = self.gen.render(self.cursor.tier, &self.cursor.digits);
        self.gen.advance(&mut self.cursor);
        Some(candidate)
    }
}

fn class_alphabet(class: &str) -> Alphabet {
    Arc::new(class.chars().map(|c| c.to_string()).collect())
}
