//! # BigInt
//! Arbitrary-precision signed integers. All bitwise operations behave as if BigInt were
//! represented in two's-complement notation with infinite sign extension.
//!
//! Values are stored as a sign flag plus a magnitude of 32-bit words (see [`Words`]), so
//! cloning a `BigInt` is O(1): large magnitudes are shared until one of the copies is written.
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```

use std::ops::{Neg, Not};

use crate::big_int_arith::trim_high_zeros;
use crate::big_int_words::Words;

/// Implements a binary operator for every ownership combination, plus the compound assignment
/// and `i32` right-hand sides, on top of `impl $imp<&BigInt> for BigInt`.
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                <BigInt as $imp<&BigInt>>::$method(self, &rhs)
            }
        }

        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                <BigInt as $imp<&BigInt>>::$method(self.clone(), rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                <BigInt as $imp<&BigInt>>::$method(self.clone(), &rhs)
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            #[inline]
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = <BigInt as $imp<&BigInt>>::$method(std::mem::take(self), rhs);
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            #[inline]
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = <BigInt as $imp<&BigInt>>::$method(std::mem::take(self), &rhs);
            }
        }

        forward_binop!(@primitive $imp, $method, $assign_imp, $assign_method; i32);
    };
    (@primitive $imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident; $($t: ty),*) => {
    $(
        impl $imp<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: $t) -> BigInt {
                <BigInt as $imp<&BigInt>>::$method(self, &BigInt::from(rhs))
            }
        }

        impl $imp<$t> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: $t) -> BigInt {
                <BigInt as $imp<&BigInt>>::$method(self.clone(), &BigInt::from(rhs))
            }
        }

        impl $assign_imp<$t> for BigInt {
            #[inline]
            fn $assign_method(&mut self, rhs: $t) {
                *self = <BigInt as $imp<&BigInt>>::$method(std::mem::take(self), &BigInt::from(rhs));
            }
        }
    )*
    };
}

#[derive(Debug, Clone)]
pub struct BigInt {
    /// `true` only for strictly negative values.
    pub(crate) sign: bool,
    /// Magnitude, least significant word first, never empty, no high zero words.
    pub(crate) words: Words,
}

// 实现构造
impl BigInt {
    pub const ZERO: BigInt = BigInt { sign: false, words: Words::single(0) };
    pub const ONE: BigInt = BigInt { sign: false, words: Words::single(1) };

    /// Builds a value from a possibly unnormalized magnitude.
    pub(crate) fn from_parts(sign: bool, words: Words) -> BigInt {
        let mut value = BigInt { sign, words };
        value.normalize();
        value
    }

    fn from_magnitude(sign: bool, mut val: u128) -> BigInt {
        let mut words = Words::single(val as u32);
        val >>= u32::BITS;
        while val != 0 {
            words.push(val as u32);
            val >>= u32::BITS;
        }
        BigInt::from_parts(sign, words)
    }

    /// Strips high zero words and clears the sign of a zero magnitude.
    pub(crate) fn normalize(&mut self) {
        trim_high_zeros(&mut self.words);
        if self.is_zero() {
            self.sign = false;
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::ZERO
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from_magnitude(false, val as u128)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from_magnitude(val < 0, val.unsigned_abs() as u128)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

// 杂项
impl BigInt {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.len() == 1 && self.words.get(0) == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    /// `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> i8 {
        if self.sign {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn abs(&self) -> BigInt {
        self.clone().abs_take()
    }

    fn abs_take(self) -> BigInt {
        let BigInt { words, .. } = self;
        BigInt { sign: false, words }
    }

    /// Returns a copy whose storage is not shared with `self` or any other value.
    ///
    /// Clones share large magnitudes; use this to hand a value to code that must not touch
    /// the reference count of the original block.
    pub fn deep_clone(&self) -> BigInt {
        BigInt { sign: self.sign, words: self.words.deep_clone() }
    }
}

// 实现自增自减
impl BigInt {
    /// Prefix increment, `++x`.
    pub fn inc(&mut self) -> &mut Self {
        *self += &BigInt::ONE;
        self
    }

    /// Prefix decrement, `--x`.
    pub fn dec(&mut self) -> &mut Self {
        *self -= &BigInt::ONE;
        self
    }

    /// Postfix increment, `x++`: returns the value held before the update.
    pub fn post_inc(&mut self) -> BigInt {
        let old = self.clone();
        self.inc();
        old
    }

    /// Postfix decrement, `x--`: returns the value held before the update.
    pub fn post_dec(&mut self) -> BigInt {
        let old = self.clone();
        self.dec();
        old
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let zero = self.is_zero();
        let BigInt { sign, words } = self;
        BigInt { sign: !sign && !zero, words }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现按位取反: !x == -(x + 1)
impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        -(self + &BigInt::ONE)
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.clone().not()
    }
}

#[test]
fn test_from() {
    let big = BigInt::from(12_i8);
    assert_eq!(big.words.as_slice(), &[12]);
    assert!(!big.sign);

    let big = BigInt::from(-100_i16);
    assert_eq!(big.words.as_slice(), &[100]);
    assert!(big.sign);

    let big = BigInt::from(i64::MIN);
    assert_eq!(big.words.as_slice(), &[0, 0x8000_0000]);
    assert!(big.sign);

    let big = BigInt::from(u128::MAX);
    assert_eq!(big.words.as_slice(), &[u32::MAX; 4]);
    assert!(!big.words.is_inline());

    let big = BigInt::from(0_u64);
    assert!(big.is_zero());
    assert_eq!(big, BigInt::ZERO);
    assert_eq!(big.signum(), 0);
}

#[test]
fn test_neg_never_makes_negative_zero() {
    let zero = -BigInt::ZERO;
    assert!(!zero.sign);
    assert_eq!(zero.to_string(), "0");
    assert_eq!(-BigInt::from(5), BigInt::from(-5));
    assert_eq!(-(-BigInt::from(5)), BigInt::from(5));
}

#[test]
fn test_not() {
    assert_eq!(!BigInt::from(0), BigInt::from(-1));
    assert_eq!(!BigInt::from(-1), BigInt::from(0));
    assert_eq!(!&BigInt::from(41), BigInt::from(-42));
    assert_eq!(!BigInt::from(u64::MAX), -BigInt::from(u64::MAX) - 1);
}

#[test]
fn test_inc_dec() {
    let mut x = BigInt::from(-1);
    x.inc();
    assert_eq!(x, BigInt::ZERO);
    assert!(!x.sign);
    assert_eq!(x.post_inc(), BigInt::ZERO);
    assert_eq!(x, BigInt::ONE);
    assert_eq!(x.post_dec(), BigInt::ONE);
    x.dec().dec();
    assert_eq!(x, BigInt::from(-2));

    let mut y = BigInt::from(u32::MAX);
    y.inc();
    assert_eq!(y.words.as_slice(), &[0, 1]);
}

#[test]
fn test_abs_and_signum() {
    let x = BigInt::from(-77);
    assert_eq!(x.abs(), BigInt::from(77));
    assert_eq!(x.signum(), -1);
    assert!(x.is_negative());
    assert_eq!(BigInt::from(9).signum(), 1);
}

#[test]
fn test_deep_clone_shares_nothing() {
    let a: BigInt = "123456789012345678901234567890".parse().unwrap();
    let shared = a.clone();
    assert!(a.words.same_block(&shared.words));
    let private = a.deep_clone();
    assert!(!a.words.same_block(&private.words));
    assert_eq!(a, private);
}

#[test]
fn test_literal_right_hand_side() {
    let a: BigInt = "123456789012345678901234567890".parse().unwrap();
    let mut b = a.clone();
    b += 1;
    assert_eq!(b.to_string(), "123456789012345678901234567891");
    assert_eq!(a.to_string(), "123456789012345678901234567890");
    assert_eq!(&a + 1 - 1, a);
    assert_eq!(BigInt::from(7) * 6, BigInt::from(42));
    assert_eq!(BigInt::from(-7) / 2, BigInt::from(-3));
    assert_eq!(BigInt::from(-7) % 2, BigInt::from(-1));
    assert_eq!(BigInt::from(12) & 10, BigInt::from(8));
    let mut c = BigInt::from(5);
    c -= 6;
    c *= -3;
    assert_eq!(c, BigInt::from(3));
}
