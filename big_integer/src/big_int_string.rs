//! Decimal conversion, built on the word kernels of the arithmetic engine.
//!
//! Digits are processed in chunks of [`DECIMAL_CHUNK_DIGITS`], the largest power of ten that
//! fits in one word: parsing multiplies by `10^9` and adds a chunk, formatting short-divides by
//! `10^9`. Long values are first split recursively by cached powers of ten.

use std::fmt;
use std::str::FromStr;

use crate::big_int::BigInt;
use crate::big_int_arith::{divide_magnitude, mul_add_word, short_div, trim_high_zeros};
use crate::big_int_words::Words;
use crate::big_num_cache::pow10_squared;
use crate::big_num_constants::*;
use crate::big_num_error::{BigIntError, Result};

// 实现解析
impl FromStr for BigInt {
    type Err = BigIntError;

    /// Parses an optionally signed decimal numeral. The empty string and `"-0"` both denote zero.
    fn from_str(val: &str) -> Result<BigInt> {
        if val.is_empty() {
            return Ok(BigInt::ZERO);
        }
        let (negative, digits) = match val.as_bytes()[0] {
            b'-' => (true, &val[1..]),
            b'+' => (false, &val[1..]),
            _ => (false, val),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BigIntError::Parse { input: val.to_string() });
        }

        // skip leading zero
        let digits = digits.trim_start_matches('0');
        let mut words = Words::single(0);

        let mut first_group_len = digits.len() % DECIMAL_CHUNK_DIGITS;
        if first_group_len == 0 {
            first_group_len = DECIMAL_CHUNK_DIGITS;
        }
        let mut cursor = 0;
        let mut group_len = first_group_len.min(digits.len());
        while cursor < digits.len() {
            let group = &digits.as_bytes()[cursor..cursor + group_len];
            let group_val = group.iter().fold(0u32, |acc, &b| acc * 10 + (b - b'0') as u32);
            mul_add_word(&mut words, DECIMAL_CHUNK_RADIX, group_val);
            cursor += group_len;
            group_len = DECIMAL_CHUNK_DIGITS;
        }

        Ok(BigInt::from_parts(negative, words))
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<BigInt> {
        val.parse()
    }
}

// 实现打印
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.sign, "", &magnitude_to_string(&self.words))
    }
}

fn magnitude_to_string(words: &Words) -> String {
    if words.len() <= RECURSIVE_TO_STRING_THRESHOLD {
        return small_to_string(words.clone());
    }
    let mut s = String::new();
    to_string_recursive(words.clone(), &mut s, 0);
    s
}

/// Converts by repeated short division, one `10^9` digit group at a time.
fn small_to_string(mut tmp: Words) -> String {
    let mut digit_groups: Vec<u32> = Vec::with_capacity(tmp.len() * 32 / 29 + 1);
    loop {
        digit_groups.push(short_div(&mut tmp, DECIMAL_CHUNK_RADIX));
        trim_high_zeros(&mut tmp);
        if tmp.len() == 1 && tmp.get(0) == 0 {
            break;
        }
    }

    let mut result = String::with_capacity(digit_groups.len() * DECIMAL_CHUNK_DIGITS);
    let mut groups = digit_groups.iter().rev();
    if let Some(first) = groups.next() {
        result.push_str(&first.to_string());
    }
    // remaining groups are padded with leading zeros
    for group in groups {
        result.push_str(&format!("{:0width$}", group, width = DECIMAL_CHUNK_DIGITS));
    }
    result
}

/// Appends the decimal digits of `u` to `s`, padded with leading zeros to `digits` characters
/// unless `u` starts the string.
/// This implements the recursive Schoenhage algorithm for base conversions.
/// See Knuth, Donald, _The Art of Computer Programming_, Vol. 2, Answers to Exercises (4.4) Question 14.
fn to_string_recursive(u: Words, s: &mut String, digits: usize) {
    let is_zero = u.len() == 1 && u.get(0) == 0;
    if s.is_empty() && is_zero {
        return;
    }
    if u.len() <= RECURSIVE_TO_STRING_THRESHOLD {
        let u_s = small_to_string(u);
        if !s.is_empty() {
            for _ in u_s.len()..digits {
                s.push('0');
            }
        }
        s.push_str(&u_s);
        return;
    }

    // pick n so that 10^(9 * 2^n) has about half the digits of u
    let top = u.last().unwrap_or(0);
    let bits = u.len() * WORD_BITS as usize - top.leading_zeros() as usize;
    let approx_digits = bits as f64 * LOG10_2;
    let n = (approx_digits / (2 * DECIMAL_CHUNK_DIGITS) as f64).log2().max(0.0) as usize;
    let v = pow10_squared(n);
    let expected_digits = DECIMAL_CHUNK_DIGITS << n;

    let (mut q, mut r) = divide_magnitude(u, v.words.as_slice());
    trim_high_zeros(&mut q);
    trim_high_zeros(&mut r);

    to_string_recursive(q, s, digits.saturating_sub(expected_digits));
    to_string_recursive(r, s, expected_digits);
}

#[cfg(test)]
mod tests {
    use crate::big_int::BigInt;
    use crate::big_num_error::BigIntError;
    use crate::proptest::*;

    #[test]
    fn to_string() {
        do_test(unary, |x: BigInt| Some(x.to_string() == oracle(&x).to_string()))
    }

    #[test]
    fn round_trip() {
        do_test(unary, |x: BigInt| Some(x.to_string().parse::<BigInt>().ok()? == x))
    }

    #[test]
    fn to_string_long_values() {
        // shifting past the recursive threshold forces the split conversion on every case
        do_test(binary, |(x, y): (BigInt, BigInt)| {
            let z = (x << 700) + y;
            let text = z.to_string();
            Some(text == oracle(&z).to_string() && text.parse::<BigInt>().ok()? == z)
        })
    }

    #[test]
    fn test_zero_spellings() {
        for s in ["", "0", "-0", "+0", "000", "-000"] {
            let x: BigInt = s.parse().unwrap();
            assert_eq!(x, BigInt::ZERO, "{:?}", s);
            assert!(!x.is_negative());
            assert_eq!(x.to_string(), "0");
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("12345".parse::<BigInt>().unwrap(), BigInt::from(12345));
        assert_eq!("-12345".parse::<BigInt>().unwrap(), BigInt::from(-12345));
        assert_eq!("+7".parse::<BigInt>().unwrap(), BigInt::from(7));
        assert_eq!("0004294967296".parse::<BigInt>().unwrap(), BigInt::from(1_u64 << 32));
        assert_eq!(
            "-170141183460469231731687303715884105728".parse::<BigInt>().unwrap(),
            BigInt::from(i128::MIN)
        );
        assert_eq!(BigInt::try_from("1000000000").unwrap(), BigInt::from(1_000_000_000));
    }

    #[test]
    fn test_parse_errors() {
        for s in ["-", "+", "12a", "1 2", "--1", "+-1", "1-", "0x10", "１"] {
            assert_eq!(
                s.parse::<BigInt>(),
                Err(BigIntError::Parse { input: s.to_string() }),
                "{:?}",
                s
            );
        }
        let err = "12a".parse::<BigInt>().unwrap_err();
        assert_eq!(err.to_string(), "invalid integer literal: \"12a\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(BigInt::from(-42).to_string(), "-42");
        assert_eq!(BigInt::from(1_000_000_000_u64 * 1_000_000_000).to_string(), "1000000000000000000");
        assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
        assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
        assert_eq!(format!("{:06}", BigInt::from(-42)), "-00042");
    }

    #[test]
    fn test_recursive_conversion() {
        // well above the recursive threshold, with zero digit groups inside
        let text = format!("-9{}1{}7", "0".repeat(400), "0".repeat(333));
        let x: BigInt = text.parse().unwrap();
        assert!(x.words.len() > 40);
        assert_eq!(x.to_string(), text);

        let ten = BigInt::from(10);
        let mut p = BigInt::from(1);
        for _ in 0..500 {
            p *= &ten;
        }
        assert_eq!(p.to_string(), format!("1{}", "0".repeat(500)));
        assert_eq!((&p - 1).to_string(), "9".repeat(500));
    }
}
