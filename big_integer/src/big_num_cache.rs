use lazy_static::*;
use log::trace;
use parking_lot::Mutex;

use crate::BigInt;
use crate::big_num_constants::DECIMAL_CHUNK_RADIX;

lazy_static! {
    /// Entry `k` holds `10^(9 * 2^k)`; grown on demand by squaring the last entry.
    static ref POW10_CACHE: Mutex<Vec<BigInt>> = Mutex::new(vec![BigInt::from(DECIMAL_CHUNK_RADIX)]);
}

/// Returns `10^(9 * 2^exponent)`.
///
/// The returned value shares its storage with the cached entry, so handing it out is O(1).
pub(crate) fn pow10_squared(exponent: usize) -> BigInt {
    let mut cache = POW10_CACHE.lock();
    while cache.len() <= exponent {
        let last = &cache[cache.len() - 1];
        let next = last * last;
        trace!(target: "big_integer::cache", "caching 10^(9*2^{}) ({} words)", cache.len(), next.words.len());
        cache.push(next);
    }
    cache[exponent].clone()
}
