//! Congruences and the Chinese Remainder Theorem
//!
//! Extended Euclidean machinery (gcd certificates, modular inverses) and the
//! CRT solver built on top of it.

use crate::error::{MathError, MathResult};

/// Extended GCD returning (gcd, x, y) where a*x + b*y = gcd.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        (b, 0, 1)
    } else {
        let (gcd, x1, y1) = extended_gcd(b % a, a);
        let x = y1 - (b / a) * x1;
        let y = x1;
        (gcd, x, y)
    }
}

/// Modular inverse of `a` mod `m`, if it exists (gcd(a, m) = 1).
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (gcd, x, _) = extended_gcd(a, m);
    if gcd != 1 {
        None
    } else {
        Some(((x % m) + m) % m)
    }
}

/// Solve a system of congruences x = remainders[i] (mod moduli[i]).
///
/// The moduli must be positive and pairwise coprime, and both slices the
/// same length; violations are domain errors. The unique solution in
/// [0, product of moduli) is returned.
pub fn chinese_remainder(remainders: &[i64], moduli: &[i64]) -> MathResult<i64> {
    if remainders.len() != moduli.len() {
        return Err(MathError::Dimension {
            expected: remainders.len(),
            actual: moduli.len(),
        });
    }
    for &m in moduli {
        if m < 1 {
            return Err(MathError::domain("moduli must be positive"));
        }
    }
    for i in 0..moduli.len() {
        for j in (i + 1)..moduli.len() {
            if extended_gcd(moduli[i], moduli[j]).0 != 1 {
                return Err(MathError::domain(format!(
                    "moduli must be pairwise coprime: gcd({}, {}) != 1",
                    moduli[i], moduli[j]
                )));
            }
        }
    }

    let mut product: i64 = 1;
    for &m in moduli {
        product = product.checked_mul(m).ok_or_else(|| {
            MathError::domain("product of moduli overflows the solution range")
        })?;
    }

    let wide_product = product as i128;
    let mut total: i128 = 0;
    for (&r, &m) in remainders.iter().zip(moduli) {
        let partial = product / m;
        // Coprimality was checked above, so the inverse always exists.
        let inverse = mod_inverse(partial % m, m)
            .ok_or_else(|| MathError::domain("moduli must be pairwise coprime"))?;
        let term = (r as i128 % wide_product) * (partial as i128) % wide_product
            * (inverse as i128)
            % wide_product;
        total = (total + term) % wide_product;
    }

    Ok((((total % wide_product) + wide_product) % wide_product) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_gcd() {
        assert_eq!(extended_gcd(240, 46), (2, -9, 47));
        let (g, x, y) = extended_gcd(35, 15);
        assert_eq!(g, 5);
        assert_eq!(35 * x + 15 * y, 5);
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(3, 11), Some(4));
        assert_eq!(mod_inverse(17, 101), Some(6));
        assert_eq!(mod_inverse(4, 8), None);
        // Every residue is 0 mod 1, and 0 inverts trivially.
        assert_eq!(mod_inverse(5, 1), Some(0));
    }

    #[test]
    fn test_chinese_remainder() {
        assert_eq!(chinese_remainder(&[2, 3], &[3, 5]), Ok(8));
        assert_eq!(chinese_remainder(&[2, 3, 2], &[3, 5, 7]), Ok(23));
        assert_eq!(chinese_remainder(&[0, 0], &[4, 9]), Ok(0));
    }

    #[test]
    fn test_chinese_remainder_solution_in_range() {
        let remainders = [1, 4, 6];
        let moduli = [5, 7, 11];
        let x = chinese_remainder(&remainders, &moduli).unwrap();
        assert!(x >= 0 && x < 5 * 7 * 11);
        for (&r, &m) in remainders.iter().zip(&moduli) {
            assert_eq!(x % m, r % m);
        }
    }

    #[test]
    fn test_chinese_remainder_negative_remainders() {
        // -1 mod 3 and -1 mod 5 is 14 mod 15.
        assert_eq!(chinese_remainder(&[-1, -1], &[3, 5]), Ok(14));
    }

    #[test]
    fn test_chinese_remainder_rejects_non_coprime_moduli() {
        let err = chinese_remainder(&[1, 2], &[4, 6]).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_chinese_remainder_rejects_length_mismatch() {
        let err = chinese_remainder(&[1, 2, 3], &[3, 5]).unwrap_err();
        assert_eq!(
            err,
            MathError::Dimension {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_chinese_remainder_rejects_nonpositive_moduli() {
        assert!(chinese_remainder(&[1], &[0]).unwrap_err().is_domain_error());
        assert!(chinese_remainder(&[1], &[-3]).unwrap_err().is_domain_error());
    }
}
