/// Number of words a `Words` buffer keeps inline before moving to the heap.
pub const INLINE_CAPACITY: usize = 2;

pub const WORD_BITS: u32 = u32::BITS;

/// Decimal digits that always fit in one word.
pub const DECIMAL_CHUNK_DIGITS: usize = 9;

/// `10^DECIMAL_CHUNK_DIGITS`
pub const DECIMAL_CHUNK_RADIX: u32 = 1_000_000_000;

/// Above this many words, formatting splits the value by cached powers of ten.
pub const RECURSIVE_TO_STRING_THRESHOLD: usize = 20;

/// `log10(2)`, used to estimate the decimal length of a magnitude.
pub const LOG10_2: f64 = 0.301_029_995_663_981_2;
