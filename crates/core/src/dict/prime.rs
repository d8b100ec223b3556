/// Deterministic primality test by 6k +/- 1 trial division.
#[must_use]
pub const fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut divisor = 5;
    while divisor <= n / divisor {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}

/// Smallest prime in `[estimate, 2 * estimate]`, with `estimate` clamped to
/// at least 1.
///
/// Bertrand's postulate guarantees such a prime exists. The scan is capped at
/// `2 * estimate` anyway and falls back to `estimate` itself on overflow.
#[must_use]
pub fn bucket_count_for(estimate: usize) -> usize {
    let low = estimate.max(1);
    let high = low.saturating_mul(2);
    (low..=high).find(|&n| is_prime(n)).unwrap_or(low)
}
