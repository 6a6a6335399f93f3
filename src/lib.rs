//! numera -- an educational mathematics toolkit.
//!
//! Number-theory algorithms (sieves, perfect numbers, totients, Collatz,
//! twin primes, Goldbach verification, the Chinese Remainder Theorem), a toy
//! formal-proof representation, small linear-algebra helpers, a timing
//! harness, and an interactive command shell over all of it.

pub mod benchmark;
pub mod core;
pub mod error;
pub mod linear_algebra;
pub mod number_theory;
pub mod proofs;
pub mod repl;
pub mod sieve;

pub use self::core::{gcd, is_prime, lcm, prime_factorization};
pub use error::{MathError, MathResult};
pub use number_theory::{
    chinese_remainder, collatz_sequence, euler_totient, extended_gcd, fibonacci,
    fibonacci_sequence, is_perfect, mod_inverse, perfect_numbers_up_to, proper_divisor_sum,
    twin_primes, verify_goldbach,
};
pub use proofs::{
    fundamental_theorem_of_arithmetic, Axiom, Proof, ProofStep, Statement, StatementKind, Theorem,
};
pub use sieve::{segmented_sieve, sieve, sieve_with, simple_sieve, SieveConfig};
