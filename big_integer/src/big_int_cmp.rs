// 实现大小比较
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::big_int::BigInt;

/// Compares two trimmed magnitudes: by word count first, then most significant word first.
pub(crate) fn cmp_magnitude(x: &[u32], y: &[u32]) -> Ordering {
    x.len()
        .cmp(&y.len())
        .then_with(|| x.iter().rev().cmp(y.iter().rev()))
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        // negative zero never escapes normalization, so there is a single zero to compare against
        self.sign == other.sign && self.words == other.words
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitude(self.words.as_slice(), other.words.as_slice()),
            (true, true) => cmp_magnitude(self.words.as_slice(), other.words.as_slice()).reverse(),
        }
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.words.hash(state);
    }
}
