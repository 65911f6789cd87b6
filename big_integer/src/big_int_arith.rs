//! Addition, subtraction, multiplication and division.
//!
//! Every binary operator takes its left operand by value and reuses that storage for the
//! result; when the storage is shared with another value it is unshared before the first write.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use crate::big_int::BigInt;
use crate::big_int_cmp::cmp_magnitude;
use crate::big_int_words::Words;
use crate::big_num_constants::WORD_BITS;
use crate::big_num_error::{BigIntError, Result};

// 字级别的辅助函数

/// Drops most significant zero words, keeping at least one word.
pub(crate) fn trim_high_zeros(words: &mut Words) {
    let len = words.as_slice().iter().rposition(|&w| w != 0).map_or(1, |top| top + 1);
    if words.len() == 0 {
        words.push(0);
    } else {
        words.truncate(len);
    }
}

/// `|x| += |y|`
pub(crate) fn add_magnitude(x: &mut Words, y: &[u32]) {
    if x.len() < y.len() {
        x.resize(y.len(), 0);
    }
    let mut carry: u64 = 0;
    for (i, slot) in x.as_mut_slice().iter_mut().enumerate() {
        if i >= y.len() && carry == 0 {
            break;
        }
        let sum = *slot as u64 + y.get(i).copied().unwrap_or(0) as u64 + carry;
        *slot = sum as u32;
        carry = sum >> WORD_BITS;
    }
    if carry != 0 {
        x.push(carry as u32);
    }
}

/// `x -= y` over the words of `x`, returning the final borrow.
fn sub_assign_slice(x: &mut [u32], y: &[u32]) -> bool {
    let mut borrow: i64 = 0;
    for (i, slot) in x.iter_mut().enumerate() {
        if i >= y.len() && borrow == 0 {
            break;
        }
        let difference = *slot as i64 - y.get(i).copied().unwrap_or(0) as i64 - borrow;
        *slot = difference as u32;
        borrow = (difference < 0) as i64;
    }
    borrow != 0
}

/// `|x| -= |y|`, requires `|x| >= |y|`. The result is not trimmed.
fn sub_magnitude(x: &mut Words, y: &[u32]) {
    let borrow = sub_assign_slice(x.as_mut_slice(), y);
    debug_assert!(!borrow, "magnitude subtraction underflowed");
}

/// `|x| = |x| * factor + addend`, in one pass.
pub(crate) fn mul_add_word(x: &mut Words, factor: u32, addend: u32) {
    let mut carry = addend as u64;
    for slot in x.as_mut_slice() {
        let product = (*slot as u64) * (factor as u64) + carry;
        *slot = product as u32;
        carry = product >> WORD_BITS;
    }
    if carry != 0 {
        x.push(carry as u32);
    }
}

#[inline]
pub(crate) fn mul_word(x: &mut Words, factor: u32) {
    mul_add_word(x, factor, 0);
}

/// Divides `|x|` by a single word in place, from the most significant word down, and returns
/// the remainder. The quotient is not trimmed.
pub(crate) fn short_div(x: &mut Words, divisor: u32) -> u32 {
    debug_assert!(divisor != 0);
    let mut remainder: u64 = 0;
    for slot in x.as_mut_slice().iter_mut().rev() {
        let current = (remainder << WORD_BITS) | *slot as u64;
        *slot = (current / divisor as u64) as u32;
        remainder = current % divisor as u64;
    }
    remainder as u32
}

/// Schoolbook product of two magnitudes, `len(x) + len(y)` words long.
fn mul_slices(x: &[u32], y: &[u32]) -> Vec<u32> {
    let mut result = vec![0u32; x.len() + y.len()];
    for (i, &a) in x.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &b) in y.iter().enumerate() {
            let product = (a as u64) * (b as u64) + result[i + j] as u64 + carry;
            result[i + j] = product as u32;
            carry = product >> WORD_BITS;
        }
        result[i + y.len()] = carry as u32;
    }
    result
}

/// `y * factor`, `len(y) + 1` words long.
fn mul_slice_word(y: &[u32], factor: u32) -> Vec<u32> {
    let mut result = Vec::with_capacity(y.len() + 1);
    let mut carry: u64 = 0;
    for &b in y {
        let product = (b as u64) * (factor as u64) + carry;
        result.push(product as u32);
        carry = product >> WORD_BITS;
    }
    result.push(carry as u32);
    result
}

// 实现加法
impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: &BigInt) -> Self::Output {
        if self.sign == rhs.sign {
            add_magnitude(&mut self.words, rhs.words.as_slice());
            return self;
        }
        if self.sign {
            // -|a| + b == b - |a|
            rhs.clone() - &(-self)
        } else {
            // a + -|b| == a - |b|
            self - &(-rhs)
        }
    }
}

forward_binop!(Add, add, AddAssign, add_assign);

// 实现减法
impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: &BigInt) -> Self::Output {
        if self.is_zero() {
            return -rhs;
        }
        if rhs.is_zero() {
            return self;
        }
        if self.sign != rhs.sign {
            return if self.sign {
                // -|a| - b == -(|a| + b)
                -(-self + rhs)
            } else {
                // a - -|b| == a + |b|
                self + &(-rhs)
            };
        }
        if self.sign {
            // -|a| - -|b| == |b| - |a|
            return -rhs - &(-self);
        }
        if cmp_magnitude(self.words.as_slice(), rhs.words.as_slice()) == Ordering::Less {
            return -(rhs.clone() - &self);
        }
        sub_magnitude(&mut self.words, rhs.words.as_slice());
        self.normalize();
        self
    }
}

forward_binop!(Sub, sub, SubAssign, sub_assign);

// 实现乘法
impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    fn mul(mut self, rhs: &BigInt) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::ZERO;
        }
        let sign = self.sign ^ rhs.sign;
        if rhs.words.len() == 1 {
            mul_word(&mut self.words, rhs.words.get(0));
            self.sign = sign;
            return self;
        }
        let product = mul_slices(self.words.as_slice(), rhs.words.as_slice());
        BigInt::from_parts(sign, Words::from_vec(product))
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign);

// 实现除法
impl BigInt {
    /// Truncating division returning `(quotient, remainder)`.
    ///
    /// The quotient is rounded toward zero and the remainder takes the sign of the dividend,
    /// so `self == rhs * quotient + remainder` and `|remainder| < |rhs|`.
    ///
    /// ```
    /// use big_integer::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_mod(&BigInt::from(2)).unwrap();
    /// assert_eq!(q, BigInt::from(-3));
    /// assert_eq!(r, BigInt::from(-1));
    /// ```
    pub fn div_mod(self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let quotient_sign = self.sign ^ rhs.sign;
        let remainder_sign = self.sign;
        let (quotient, remainder) = divide_magnitude(self.words, rhs.words.as_slice());
        Ok((
            BigInt::from_parts(quotient_sign, quotient),
            BigInt::from_parts(remainder_sign, remainder),
        ))
    }

    pub fn checked_div(self, rhs: &BigInt) -> Result<BigInt> {
        self.div_mod(rhs).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(self, rhs: &BigInt) -> Result<BigInt> {
        self.div_mod(rhs).map(|(_, remainder)| remainder)
    }
}

/// Divides magnitude `u` by the non-zero magnitude `v`. Neither result is trimmed.
pub(crate) fn divide_magnitude(u: Words, v: &[u32]) -> (Words, Words) {
    if cmp_magnitude(u.as_slice(), v) == Ordering::Less {
        return (Words::single(0), u);
    }
    if v.len() == 1 {
        let mut quotient = u;
        let remainder = short_div(&mut quotient, v[0]);
        return (quotient, Words::single(remainder));
    }
    divide_knuth(u, v)
}

/// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
/// Requires `len(v) >= 2` and `|u| >= |v|`.
fn divide_knuth(mut u: Words, v: &[u32]) -> (Words, Words) {
    // D1 normalize
    // scale both operands by d so that the top divisor word is at least 2^31,
    // which keeps the trial quotient within two of the real digit
    let top = v[v.len() - 1] as u64;
    let d = ((1u64 << WORD_BITS) / (top + 1)) as u32;
    mul_word(&mut u, d);
    let divisor = mul_slice_word(v, d);
    let divisor = &divisor[..v.len()];
    u.push(0);

    let n = divisor.len();
    let m = n + 1;
    let mut quotient = vec![0u32; u.len() - n];

    // D2 - D7
    for j in (0..quotient.len()).rev() {
        let mut qt = trial(u.as_slice(), divisor);
        let mut dq = mul_slice_word(divisor, qt);
        while window_smaller(u.as_slice(), &dq, m) {
            qt -= 1;
            sub_assign_slice(&mut dq, divisor);
        }
        quotient[j] = qt;

        let len = u.len();
        let borrow = sub_assign_slice(&mut u.as_mut_slice()[len - m..], &dq);
        debug_assert!(!borrow && u.last() == Some(0));
        u.pop();
    }

    // D8 unnormalize
    short_div(&mut u, d);
    (Words::from_vec(quotient), u)
}

/// Estimates the next quotient digit from the top three words of `u` and the top two of `v`.
/// The estimate is never below the real digit.
fn trial(u: &[u32], v: &[u32]) -> u32 {
    let u_len = u.len();
    let v_len = v.len();
    let dividend = ((u[u_len - 1] as u128) << 64)
        | ((u[u_len - 2] as u128) << 32)
        | (u[u_len - 3] as u128);
    let divisor = ((v[v_len - 1] as u128) << 32) | (v[v_len - 2] as u128);
    (dividend / divisor).min(u32::MAX as u128) as u32
}

/// Compares the top `m` words of `u` against `dq`, most significant first.
fn window_smaller(u: &[u32], dq: &[u32], m: usize) -> bool {
    let window = &u[u.len() - m..];
    for i in (0..m).rev() {
        let x = window[i];
        let y = dq.get(i).copied().unwrap_or(0);
        if x != y {
            return x < y;
        }
    }
    false
}

impl Div<&BigInt> for BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if `rhs` is zero; use [`BigInt::checked_div`] to get an error instead.
    fn div(self, rhs: &BigInt) -> Self::Output {
        match self.div_mod(rhs) {
            Ok((quotient, _)) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

forward_binop!(Div, div, DivAssign, div_assign);

// 实现求余
impl Rem<&BigInt> for BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if `rhs` is zero; use [`BigInt::checked_rem`] to get an error instead.
    fn rem(self, rhs: &BigInt) -> Self::Output {
        match self.div_mod(rhs) {
            Ok((_, remainder)) => remainder,
            Err(e) => panic!("{}", e),
        }
    }
}

forward_binop!(Rem, rem, RemAssign, rem_assign);
