use num::bigint::Sign;
use proptest::arbitrary::*;
use proptest::prelude::RngCore;
use proptest::strategy::*;
use proptest::test_runner::*;

use crate::BigInt;
use crate::big_int_words::Words;

impl ValueTree for BigInt {
    type Value = BigInt;

    fn current(&self) -> BigInt {
        self.clone()
    }

    fn simplify(&mut self) -> bool {
        false
    }

    fn complicate(&mut self) -> bool {
        false
    }
}

/// Random values of up to `words` words. Words are biased toward `0` and `u32::MAX` so carries,
/// borrows and trial-quotient corrections get exercised.
#[derive(Debug)]
pub struct BigIntStrategy {
    pub words: usize,
}

impl Strategy for BigIntStrategy {
    type Tree = BigInt;
    type Value = BigInt;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let rng = runner.rng();
        let n = 1 + rng.next_u32() as usize % self.words.max(1);
        let mut words = Vec::with_capacity(n);
        for _ in 0..n {
            let word = match rng.next_u32() % 4 {
                0 => 0,
                1 => u32::MAX,
                _ => rng.next_u32(),
            };
            words.push(word);
        }
        let negative = rng.next_u32() % 2 == 1;
        Ok(BigInt::from_parts(negative, Words::from_vec(words)))
    }
}

impl Arbitrary for BigInt {
    type Parameters = usize;
    type Strategy = BigIntStrategy;

    fn arbitrary_with(words: usize) -> Self::Strategy {
        BigIntStrategy { words }
    }
}

/// Runs `p` against values of several sizes, from inline up to magnitudes long enough for the
/// recursive decimal conversion. `p` returns `None` to reject an input.
pub fn do_test<T: Arbitrary>(s: fn(usize) -> StrategyFor<T>, p: fn(T) -> Option<bool>) {
    for words in [1, 2, 3, 4, 7, 12, 24, 48] {
        let mut cfg: Config = <_>::default();
        cfg.failure_persistence = None;
        cfg.cases = 64;
        let mut runner = TestRunner::new(cfg);
        let strategy = s(words);
        runner
            .run(&strategy, |arg| match p(arg) {
                Some(true) => Ok(()),
                Some(false) => Err(TestCaseError::fail("unexpected result")),
                None => Err(TestCaseError::reject("invalid input")),
            })
            .unwrap()
    }
}

/// The same value as a `num::BigInt`, used as a reference implementation.
pub fn oracle(x: &BigInt) -> num::BigInt {
    let sign = if x.sign { Sign::Minus } else { Sign::Plus };
    num::BigInt::from_slice(sign, x.words.as_slice())
}

pub fn from_oracle(x: &num::BigInt) -> BigInt {
    let (sign, digits) = x.to_u32_digits();
    BigInt::from_parts(sign == Sign::Minus, Words::from_vec(digits))
}

pub fn unary(words: usize) -> StrategyFor<BigInt> {
    arbitrary_with(words)
}

pub fn binary(words: usize) -> StrategyFor<(BigInt, BigInt)> {
    arbitrary_with((words, words))
}

pub fn ternary(words: usize) -> StrategyFor<(BigInt, BigInt, BigInt)> {
    arbitrary_with((words, words, words))
}

pub fn word_and<T>(words: usize) -> StrategyFor<(BigInt, T)>
where
    T: Arbitrary<Parameters = ()>,
{
    arbitrary_with((words, ()))
}
