//! Arithmetic Primitives
//!
//! Pure integer building blocks the rest of the toolkit is assembled from:
//! greatest common divisor, least common multiple, trial-division primality
//! testing, and prime factorization.

use crate::error::{MathError, MathResult};

/// Euclidean remainder loop shared by the checked entry points below.
fn euclid(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Greatest common divisor of two integers using the Euclidean algorithm.
///
/// The result is always non-negative; `gcd(a, 0)` is `|a|`. Fails with a
/// domain error when both arguments are zero, where the gcd is undefined.
pub fn gcd(a: i64, b: i64) -> MathResult<i64> {
    if a == 0 && b == 0 {
        return Err(MathError::domain(
            "gcd is undefined when both arguments are zero",
        ));
    }
    Ok(euclid(a, b))
}

/// Least common multiple of two integers.
///
/// `lcm(a, 0)` and `lcm(0, b)` are 0 by definition, special-cased before the
/// gcd so the zero/zero rejection never triggers.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / euclid(a, b) * b).abs()
}

/// Test primality by trial division up to the square root.
///
/// Checks 2 once, then only odd candidate divisors.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Prime factorization of an integer, ascending, with multiplicity.
///
/// `prime_factorization(60)` is `[2, 2, 3, 5]`. Fails with a domain error
/// for n < 2, where no factorization exists.
pub fn prime_factorization(n: u64) -> MathResult<Vec<u64>> {
    if n < 2 {
        return Err(MathError::domain(
            "prime factorization is only defined for integers >= 2",
        ));
    }

    let mut factors = Vec::new();
    let mut n = n;
    let mut d = 2;
    while d * d <= n {
        while n % d == 0 {
            factors.push(d);
            n /= d;
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    Ok(factors)
}
