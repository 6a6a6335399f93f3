//! Sieve Engine
//!
//! Prime generation via the Sieve of Eratosthenes, with a segmented variant
//! for large bounds. Segmentation changes the memory profile, never the
//! output: both paths produce identical sequences for the same limit. Peak
//! memory for the segmented path is O(sqrt(limit) + window) instead of
//! O(limit).

/// Tuning parameters for the sieve engine.
///
/// The defaults mark the point where the full boolean array stops being a
/// reasonable memory/speed trade, not a correctness boundary. Constructed
/// once and passed by reference wherever a non-default sieve is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveConfig {
    /// Limits above this are routed to the segmented variant.
    pub segment_threshold: u64,
    /// Lower bound on the window size; the actual window is
    /// max(sqrt(limit), segment_min).
    pub segment_min: u64,
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig {
            segment_threshold: 1_000_000,
            segment_min: 32_768,
        }
    }
}

/// Generate all primes up to `limit`, ascending, using the default config.
pub fn sieve(limit: u64) -> Vec<u64> {
    sieve_with(limit, &SieveConfig::default())
}

/// Generate all primes up to `limit` with explicit tuning parameters.
pub fn sieve_with(limit: u64, config: &SieveConfig) -> Vec<u64> {
    if limit <= config.segment_threshold {
        simple_sieve(limit)
    } else {
        segmented_sieve(limit, config.segment_min)
    }
}

/// Classic Sieve of Eratosthenes over a full boolean array.
pub fn simple_sieve(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }

    let limit = limit as usize;
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            for j in ((i * i)..=limit).step_by(i) {
                is_prime[j] = false;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &prime)| if prime { Some(i as u64) } else { None })
        .collect()
}

/// Segmented Sieve of Eratosthenes.
///
/// Base primes up to sqrt(limit) come from [`simple_sieve`]; the remaining
/// range is processed in windows of max(sqrt(limit), `segment_min`), each
/// with its own window-sized boolean array. Marking for a base prime p
/// starts at max(p^2, first multiple of p >= window start).
pub fn segmented_sieve(limit: u64, segment_min: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }

    let root = isqrt(limit);
    let base_primes = simple_sieve(root);
    let mut primes = base_primes.clone();

    let window = root.max(segment_min).max(1);
    let mut low = root + 1;

    while low <= limit {
        let high = (low + window - 1).min(limit);
        let mut composite = vec![false; (high - low + 1) as usize];

        for &p in &base_primes {
            let first_multiple = low.div_ceil(p) * p;
            let start = first_multiple.max(p * p);
            if start > high {
                continue;
            }
            let mut j = start;
            while j <= high {
                composite[(j - low) as usize] = true;
                j += p;
            }
        }

        for (offset, &marked) in composite.iter().enumerate() {
            if !marked {
                primes.push(low + offset as u64);
            }
        }

        if high == limit {
            break;
        }
        low = high + 1;
    }

    primes
}

/// Integer square root, exact on the whole u64 range.
fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_prime;

    #[test]
    fn test_small_limits() {
        assert_eq!(sieve(0), Vec::<u64>::new());
        assert_eq!(sieve(1), Vec::<u64>::new());
        assert_eq!(sieve(2), vec![2]);
        assert_eq!(sieve(10), vec![2, 3, 5, 7]);
        assert_eq!(sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_output_is_ascending_primes() {
        let primes = sieve(1000);
        assert_eq!(primes.len(), 168);
        for window in primes.windows(2) {
            assert!(window[0] < window[1]);
        }
        for &p in &primes {
            assert!(is_prime(p), "{p} is not prime");
        }
    }

    #[test]
    fn test_segmented_matches_simple() {
        for limit in [0, 1, 2, 3, 10, 100, 1000, 7919, 10_000] {
            assert_eq!(
                segmented_sieve(limit, 16),
                simple_sieve(limit),
                "mismatch at limit {limit}"
            );
        }
    }

    #[test]
    fn test_forced_segmentation_through_config() {
        let config = SieveConfig {
            segment_threshold: 10,
            segment_min: 8,
        };
        for limit in [11, 97, 1000, 4096] {
            assert_eq!(sieve_with(limit, &config), simple_sieve(limit));
        }
    }

    #[test]
    fn test_tiny_window_still_correct() {
        // Windows smaller than the gap between consecutive primes.
        assert_eq!(segmented_sieve(200, 1), simple_sieve(200));
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(99), 9);
        assert_eq!(isqrt(100), 10);
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
    }
}
