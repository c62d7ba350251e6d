//! Per-schema generators grouped by category.

use rand::Rng;

use crate::generators::primitives::{int_in, pick, slug};
use crate::vocabulary::Vocabulary;

pub mod crm;
pub mod finance;
pub mod hr;
pub mod marketing;
pub mod supply_chain;

/// Sequential id for the zero-based row index.
pub(crate) fn row_id(idx: usize) -> i64 {
    idx as i64 + 1
}

/// Company-style name plus the slug used for its web domain.
pub(crate) fn company_name<R: Rng + ?Sized>(vocabulary: &Vocabulary, rng: &mut R) -> (String, String) {
    let adjective = pick(vocabulary.company_adjectives, rng);
    let noun = pick(vocabulary.company_nouns, rng);
    let suffix = pick(vocabulary.company_suffixes, rng);
    let base = format!("{}{}", slug(adjective), slug(noun));
    (format!("{adjective} {noun} {suffix}"), base)
}

/// Zero-padded random number with exactly `width` digits.
pub(crate) fn digits<R: Rng + ?Sized>(width: u32, rng: &mut R) -> String {
    let value = int_in(0, 10_i64.pow(width), rng);
    format!("{value:0width$}", width = width as usize)
}
