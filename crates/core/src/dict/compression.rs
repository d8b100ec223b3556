//! Compression functions: hash code to bucket index.

/// Maps a signed hash code to a bucket index.
///
/// Implementations must be pure: the result depends only on `code` and
/// `buckets`, never on what the table holds, and is always in
/// `0..buckets`. Callers never pass `buckets == 0`.
pub trait Compression {
    fn compress(&self, code: i64, buckets: usize) -> usize;
}

/// Affine compression `((scale * code + shift) mod modulus) mod buckets`.
///
/// Arithmetic is done in `i128` with Euclidean remainder, so the
/// intermediate never overflows and the result is never negative.
/// `modulus` should be a prime larger than any bucket count in use, and
/// `scale` must not be a multiple of it.
///
/// # Panics
///
/// [`compress`](Compression::compress) panics if `modulus` is zero. The
/// fields are public, so [`Affine::new`] only catches this in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affine {
    pub scale: i64,
    pub shift: i64,
    pub modulus: i64,
}

impl Affine {
    /// Smallest prime above `2^32`.
    pub const DEFAULT_MODULUS: i64 = 4_294_967_311;

    #[must_use]
    pub const fn new(scale: i64, shift: i64, modulus: i64) -> Self {
        debug_assert!(modulus != 0, "affine modulus must be non-zero");
        Self {
            scale,
            shift,
            modulus,
        }
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::new(0x9E37_79B9, 0x7F4A_7C15, Self::DEFAULT_MODULUS)
    }
}

impl Compression for Affine {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn compress(&self, code: i64, buckets: usize) -> usize {
        let mixed = (i128::from(self.scale) * i128::from(code) + i128::from(self.shift))
            .rem_euclid(i128::from(self.modulus));
        // `mixed` is in `0..modulus`, the final remainder in `0..buckets`.
        (mixed as u128 % buckets as u128) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_for_extreme_codes() {
        let affine = Affine::default();
        for buckets in [1, 2, 97, 101, 202, 4099] {
            for code in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX] {
                assert!(affine.compress(code, buckets) < buckets);
            }
        }
    }

    #[test]
    fn test_negative_modulus_stays_in_range() {
        let affine = Affine::new(7, 3, -101);
        for code in -500..500 {
            assert!(affine.compress(code, 13) < 13);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "modulus must be non-zero")]
    fn test_zero_modulus_rejected() {
        let _ = Affine::new(1, 0, 0);
    }

    #[test]
    fn test_deterministic() {
        let a = Affine::default();
        let b = Affine::default();
        for code in -1000..1000 {
            assert_eq!(a.compress(code, 101), b.compress(code, 101));
        }
    }

    #[test]
    fn test_negative_intermediate_is_adjusted() {
        // 10 * -7 + 30 = -40, -40 mod 14657 = 14617, 14617 mod 101 = 73
        let affine = Affine::new(10, 30, 14657);
        assert_eq!(affine.compress(-7, 101), 73);
        assert_eq!(affine.compress(5, 101), 80);
    }

    #[test]
    fn test_spreads_consecutive_codes() {
        let affine = Affine::default();
        let buckets = 101;
        let mut hits = [0usize; 101];
        for code in 0..10_100 {
            hits[affine.compress(code, buckets)] += 1;
        }
        // 100 codes per bucket on average; no bucket should be empty or
        // hold more than twice its share.
        assert!(hits.iter().all(|&h| h > 0 && h <= 200));
    }
}
