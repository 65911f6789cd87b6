//! Bitwise operators over the sign-and-magnitude representation.
//!
//! `&`, `|` and `^` convert negative operands to two's complement over a common word length,
//! combine the words and convert back. The words above that length are all copies of the sign
//! flag, so applying the same operation to the two sign flags gives the sign of the result.

use std::ops::{
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
};

use crate::big_int::BigInt;
use crate::big_int_arith::{add_magnitude, mul_word, short_div};
use crate::big_int_words::Words;
use crate::big_num_constants::WORD_BITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    #[inline]
    fn apply(self, x: u32, y: u32) -> u32 {
        match self {
            BitOp::And => x & y,
            BitOp::Or => x | y,
            BitOp::Xor => x ^ y,
        }
    }

    #[inline]
    fn apply_sign(self, x: bool, y: bool) -> bool {
        match self {
            BitOp::And => x & y,
            BitOp::Or => x | y,
            BitOp::Xor => x ^ y,
        }
    }
}

/// Replaces the words with their two's complement (`!x + 1`). A carry out of the top word
/// (only possible when every word is zero) is kept as an extra word.
fn twos_complement(words: &mut Words) {
    let mut carry = true;
    for slot in words.as_mut_slice() {
        let (value, overflow) = (!*slot).overflowing_add(carry as u32);
        *slot = value;
        carry = overflow;
    }
    if carry {
        words.push(1);
    }
}

fn bitwise(mut lhs: BigInt, rhs: &BigInt, op: BitOp) -> BigInt {
    let sign = op.apply_sign(lhs.sign, rhs.sign);
    let len = lhs.words.len().max(rhs.words.len());

    lhs.words.resize(len, 0);
    if lhs.sign {
        twos_complement(&mut lhs.words);
    }
    let mut other = rhs.words.clone();
    other.resize(len, 0);
    if rhs.sign {
        twos_complement(&mut other);
    }

    for (x, &y) in lhs.words.as_mut_slice().iter_mut().zip(other.as_slice()) {
        *x = op.apply(*x, y);
    }
    // convert back over the full width, before trimming
    if sign {
        twos_complement(&mut lhs.words);
    }
    BigInt::from_parts(sign, lhs.words)
}

macro_rules! impl_bitwise {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $op: expr) => {
        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                bitwise(self, rhs, $op)
            }
        }

        forward_binop!($imp, $method, $assign_imp, $assign_method);
    };
}

impl_bitwise!(BitAnd, bitand, BitAndAssign, bitand_assign, BitOp::And);
impl_bitwise!(BitOr, bitor, BitOrAssign, bitor_assign, BitOp::Or);
impl_bitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, BitOp::Xor);

// 实现左移
fn shift_left(mut value: BigInt, bits: u32) -> BigInt {
    if value.is_zero() || bits == 0 {
        return value;
    }
    mul_word(&mut value.words, 1u32 << (bits % WORD_BITS));
    value.words.insert_zeros_low((bits / WORD_BITS) as usize);
    value
}

// 实现右移, 向负无穷取整
fn shift_right(mut value: BigInt, bits: u32) -> BigInt {
    if value.is_zero() || bits == 0 {
        return value;
    }
    let low_bits = short_div(&mut value.words, 1u32 << (bits % WORD_BITS));
    let dropped = ((bits / WORD_BITS) as usize).min(value.words.len());
    let one_lost = low_bits != 0
        || value.words.as_slice()[..dropped].iter().any(|&w| w != 0);
    value.words.remove_low(dropped);

    if value.sign && one_lost {
        add_magnitude(&mut value.words, &[1]);
    }
    value.normalize();
    value
}

impl Shl<i32> for BigInt {
    type Output = BigInt;

    /// Shifts left by `bits`; a negative count shifts right instead.
    fn shl(self, bits: i32) -> Self::Output {
        if bits < 0 {
            shift_right(self, bits.unsigned_abs())
        } else {
            shift_left(self, bits as u32)
        }
    }
}

impl Shl<i32> for &BigInt {
    type Output = BigInt;

    fn shl(self, bits: i32) -> Self::Output {
        self.clone() << bits
    }
}

impl ShlAssign<i32> for BigInt {
    fn shl_assign(&mut self, bits: i32) {
        *self = std::mem::take(self) << bits;
    }
}

impl Shr<i32> for BigInt {
    type Output = BigInt;

    /// Arithmetic shift right by `bits`, rounding toward negative infinity; a negative count
    /// shifts left instead.
    fn shr(self, bits: i32) -> Self::Output {
        if bits < 0 {
            shift_left(self, bits.unsigned_abs())
        } else {
            shift_right(self, bits as u32)
        }
    }
}

impl Shr<i32> for &BigInt {
    type Output = BigInt;

    fn shr(self, bits: i32) -> Self::Output {
        self.clone() >> bits
    }
}

impl ShrAssign<i32> for BigInt {
    fn shr_assign(&mut self, bits: i32) {
        *self = std::mem::take(self) >> bits;
    }
}

#[cfg(test)]
mod tests {
    use num::Integer;

    use crate::big_int::BigInt;
    use crate::proptest::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn and() {
        do_test(binary, |(x, y): (BigInt, BigInt)| {
            Some(from_oracle(&(oracle(&x) & oracle(&y))) == x & y)
        })
    }

    #[test]
    fn or() {
        do_test(binary, |(x, y): (BigInt, BigInt)| {
            Some(from_oracle(&(oracle(&x) | oracle(&y))) == x | y)
        })
    }

    #[test]
    fn xor() {
        do_test(binary, |(x, y): (BigInt, BigInt)| {
            Some(from_oracle(&(oracle(&x) ^ oracle(&y))) == x ^ y)
        })
    }

    #[test]
    fn identities() {
        do_test(unary, |a: BigInt| {
            Some(
                !&a == -(&a + 1)
                    && (&a & &a) == a
                    && (&a | BigInt::ZERO) == a
                    && (&a ^ &a).is_zero(),
            )
        })
    }

    #[test]
    fn shl() {
        do_test(word_and::<u8>, |(x, k): (BigInt, u8)| {
            let expect = oracle(&x) * num::BigInt::from(2).pow(k as u32);
            Some(from_oracle(&expect) == x << k as i32)
        })
    }

    #[test]
    fn shr_rounds_down() {
        do_test(word_and::<u8>, |(x, k): (BigInt, u8)| {
            let expect = oracle(&x).div_floor(&num::BigInt::from(2).pow(k as u32));
            Some(from_oracle(&expect) == x >> k as i32)
        })
    }

    #[test]
    fn shift_round_trip() {
        do_test(word_and::<u8>, |(x, k): (BigInt, u8)| {
            let x = x.abs();
            Some((&x << k as i32) >> k as i32 == x)
        })
    }

    #[test]
    fn test_shift_scenarios() {
        assert_eq!(BigInt::from(1) << 65, big("36893488147419103232"));
        assert_eq!(BigInt::from(-1) >> 5, BigInt::from(-1));
        assert_eq!(BigInt::from(-4) >> 1, BigInt::from(-2));
        assert_eq!(BigInt::from(-5) >> 1, BigInt::from(-3));
        assert_eq!(BigInt::from(5) >> 1, BigInt::from(2));
        assert_eq!(BigInt::from(5) >> 100, BigInt::ZERO);
        assert_eq!(BigInt::from(-5) >> 100, BigInt::from(-1));
        assert_eq!(big("-36893488147419103232") >> 65, BigInt::from(-1));
        assert_eq!(big("-36893488147419103233") >> 65, BigInt::from(-2));
    }

    #[test]
    fn test_negative_shift_counts() {
        assert_eq!(BigInt::from(3) << -1, BigInt::from(1));
        assert_eq!(BigInt::from(3) >> -2, BigInt::from(12));
        let mut x = BigInt::from(1);
        x <<= 40;
        assert_eq!(x, BigInt::from(1_u64 << 40));
        x >>= 39;
        assert_eq!(x, BigInt::from(2));
    }

    #[test]
    fn test_full_width_complement() {
        // -1 & -(2^64 - 2^32 + 1): the result's high word is zero before converting back
        let b = -BigInt::from(0xFFFF_FFFF_0000_0001_u64);
        assert_eq!(BigInt::from(-1) & &b, b);
        // -1 ^ (2^32 - 1) needs a word more than either operand
        assert_eq!(BigInt::from(-1) ^ BigInt::from(u32::MAX), -BigInt::from(1_u64 << 32));
        assert_eq!(BigInt::from(-6) | BigInt::from(3), BigInt::from(-5));
        assert_eq!(BigInt::from(-6) & BigInt::from(7), BigInt::from(2));
    }

    #[test]
    fn test_bit_assign() {
        let mut x = BigInt::from(0b1100);
        x &= BigInt::from(0b1010);
        assert_eq!(x, BigInt::from(0b1000));
        x |= 1;
        assert_eq!(x, BigInt::from(0b1001));
        x ^= &BigInt::from(0b1111);
        assert_eq!(x, BigInt::from(0b0110));
    }
}
