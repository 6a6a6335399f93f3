//! Interactive Shell
//!
//! A command shell over the toolkit. The engine is a pure
//! string-in/string-out `execute` seam dispatched through a static command
//! match (no reflection); the readline loop in the binary wraps it.

use colored::Colorize;
use thiserror::Error;

use crate::benchmark::run_performance_analysis;
use crate::core::{gcd, lcm, prime_factorization};
use crate::error::MathError;
use crate::number_theory::{
    chinese_remainder, collatz_sequence, euler_totient, fibonacci_sequence,
    perfect_numbers_up_to, twin_primes, verify_goldbach,
};
use crate::proofs::fundamental_theorem_of_arithmetic;
use crate::sieve::sieve;

#[derive(Error, Debug)]
pub enum ReplError {
    #[error("{0}")]
    Math(#[from] MathError),
    #[error("Unknown command: {command} (type 'help' for the command list)")]
    UnknownCommand { command: String },
    #[error("Usage: {usage}")]
    Usage { usage: &'static str },
    #[error("Terminal error: {message}")]
    Terminal { message: String },
}

pub type ReplResult<T> = std::result::Result<T, ReplError>;

/// Shell engine: owns session state, executes one command line at a time.
pub struct ReplEngine {
    line_number: usize,
    running: bool,
}

impl Default for ReplEngine {
    fn default() -> Self {
        ReplEngine::new()
    }
}

impl ReplEngine {
    pub fn new() -> Self {
        ReplEngine {
            line_number: 1,
            running: true,
        }
    }

    /// Line number of the next prompt.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// False once `quit`/`exit` has been executed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Execute one command line and return its rendered output.
    pub fn execute(&mut self, line: &str) -> ReplResult<String> {
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(word) => word,
            None => return Ok(String::new()),
        };
        let args: Vec<&str> = parts.collect();
        self.line_number += 1;

        match command {
            "help" => Ok(help_text()),
            "primes" => {
                let limit = parse_integer(&args, 0, "primes <limit>")?;
                let primes = sieve(limit);
                Ok(format!(
                    "{} primes up to {}:\n{}",
                    primes.len(),
                    limit,
                    join(&primes)
                ))
            }
            "factor" => {
                let n = parse_integer(&args, 0, "factor <n>")?;
                let factors = prime_factorization(n)?;
                Ok(format!("{} = {}", n, join_with(&factors, " * ")))
            }
            "gcd" => {
                let a = parse_signed(&args, 0, "gcd <a> <b>")?;
                let b = parse_signed(&args, 1, "gcd <a> <b>")?;
                Ok(format!("gcd({}, {}) = {}", a, b, gcd(a, b)?))
            }
            "lcm" => {
                let a = parse_signed(&args, 0, "lcm <a> <b>")?;
                let b = parse_signed(&args, 1, "lcm <a> <b>")?;
                Ok(format!("lcm({}, {}) = {}", a, b, lcm(a, b)))
            }
            "euler" => {
                let n = parse_integer(&args, 0, "euler <n>")?;
                Ok(format!("phi({}) = {}", n, euler_totient(n)?))
            }
            "perfect" => {
                let limit = parse_integer(&args, 0, "perfect <limit>")?;
                let perfect = perfect_numbers_up_to(limit);
                if perfect.is_empty() {
                    Ok(format!("No perfect numbers up to {}", limit))
                } else {
                    Ok(format!("Perfect numbers up to {}: {}", limit, join(&perfect)))
                }
            }
            "twins" => {
                let limit = parse_integer(&args, 0, "twins <limit>")?;
                let pairs = twin_primes(limit);
                let rendered: Vec<String> = pairs
                    .iter()
                    .map(|(p, q)| format!("({}, {})", p, q))
                    .collect();
                Ok(format!(
                    "{} twin prime pairs up to {}:\n{}",
                    pairs.len(),
                    limit,
                    rendered.join(", ")
                ))
            }
            "goldbach" => {
                let limit = parse_integer(&args, 0, "goldbach <limit>")?;
                if verify_goldbach(limit) {
                    Ok(format!(
                        "Goldbach's conjecture holds for all even numbers up to {}",
                        limit
                    ))
                } else {
                    Ok(format!(
                        "Goldbach's conjecture FAILED below {} -- check the implementation",
                        limit
                    ))
                }
            }
            "collatz" => {
                let n = parse_integer(&args, 0, "collatz <n>")?;
                let sequence = collatz_sequence(n);
                Ok(format!(
                    "Collatz sequence for {} ({} steps):\n{}",
                    n,
                    sequence.len().saturating_sub(1),
                    join(&sequence)
                ))
            }
            "fibonacci" => {
                let count = parse_integer(&args, 0, "fibonacci <count>")? as usize;
                Ok(format!(
                    "First {} Fibonacci numbers:\n{}",
                    count,
                    join(&fibonacci_sequence(count))
                ))
            }
            "crt" => run_crt(&args),
            "theorem" => Ok(render_theorem()),
            "examples" => Ok(examples_text()),
            "benchmark" => Ok(run_performance_analysis().generate_report()),
            "quit" | "exit" => {
                self.running = false;
                Ok("Goodbye!".to_string())
            }
            _ => Err(ReplError::UnknownCommand {
                command: command.to_string(),
            }),
        }
    }
}

fn parse_integer(args: &[&str], index: usize, usage: &'static str) -> ReplResult<u64> {
    let raw = args.get(index).ok_or(ReplError::Usage { usage })?;
    raw.parse().map_err(|_| {
        ReplError::Math(MathError::Type {
            expected: "a non-negative integer".to_string(),
            actual: raw.to_string(),
        })
    })
}

fn parse_signed(args: &[&str], index: usize, usage: &'static str) -> ReplResult<i64> {
    let raw = args.get(index).ok_or(ReplError::Usage { usage })?;
    raw.parse().map_err(|_| {
        ReplError::Math(MathError::Type {
            expected: "an integer".to_string(),
            actual: raw.to_string(),
        })
    })
}

/// `crt r1,m1,r2,m2,...` -- alternating remainder/modulus pairs.
fn run_crt(args: &[&str]) -> ReplResult<String> {
    const USAGE: &str = "crt <r1,m1,r2,m2,...>";
    let raw = args.first().ok_or(ReplError::Usage { usage: USAGE })?;
    let numbers: Vec<i64> = raw
        .split(',')
        .map(|piece| {
            piece.trim().parse().map_err(|_| {
                ReplError::Math(MathError::Type {
                    expected: "an integer".to_string(),
                    actual: piece.trim().to_string(),
                })
            })
        })
        .collect::<ReplResult<_>>()?;
    if numbers.is_empty() || numbers.len() % 2 != 0 {
        return Err(ReplError::Usage { usage: USAGE });
    }

    let remainders: Vec<i64> = numbers.iter().step_by(2).copied().collect();
    let moduli: Vec<i64> = numbers.iter().skip(1).step_by(2).copied().collect();
    let x = chinese_remainder(&remainders, &moduli)?;

    let congruences: Vec<String> = remainders
        .iter()
        .zip(&moduli)
        .map(|(r, m)| format!("x = {} (mod {})", r, m))
        .collect();
    Ok(format!("{}\nx = {}", congruences.join(", "), x))
}

fn render_theorem() -> String {
    let theorem = fundamental_theorem_of_arithmetic();
    let proof = match &theorem.proof {
        Some(proof) => proof,
        None => return "Theorem has no proof attached".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n{}\n\n",
        "Fundamental Theorem of Arithmetic".bold(),
        theorem.statement.description
    ));
    out.push_str(&format!("{}\n", "Axioms:".bold()));
    for (i, axiom) in proof.axioms().iter().enumerate() {
        out.push_str(&format!("  A{}. {}\n", i + 1, axiom.statement));
    }
    out.push_str(&format!("\n{}\n", "Proof:".bold()));
    for (i, step) in proof.steps().iter().enumerate() {
        out.push_str(&format!(
            "  {}. [{}] {}\n",
            i + 1,
            step.rule,
            step.conclusion
        ));
    }
    let status = if theorem.proven && proof.verify() {
        "verified".green().to_string()
    } else {
        "NOT verified".red().to_string()
    };
    out.push_str(&format!("\nStatus: {}", status));
    out
}

fn help_text() -> String {
    format!(
        "{}\n\
         \n{}\n\
         \x20 primes <n>           primes up to n\n\
         \x20 factor <n>           prime factorization of n\n\
         \x20 gcd <a> <b>          greatest common divisor\n\
         \x20 lcm <a> <b>          least common multiple\n\
         \x20 euler <n>            Euler's totient phi(n)\n\
         \x20 perfect <n>          perfect numbers up to n\n\
         \x20 twins <n>            twin prime pairs up to n\n\
         \x20 goldbach <n>         verify Goldbach's conjecture up to n\n\
         \x20 collatz <n>          Collatz sequence for n\n\
         \x20 fibonacci <n>        first n Fibonacci numbers\n\
         \x20 crt <r1,m1,r2,m2>    Chinese Remainder Theorem solver\n\
         \n{}\n\
         \x20 theorem              the Fundamental Theorem of Arithmetic\n\
         \n{}\n\
         \x20 benchmark            time the core algorithms\n\
         \x20 examples             usage examples\n\
         \x20 help                 this help\n\
         \x20 quit, exit           leave the shell",
        "numera commands".bold(),
        "Number theory:".bold(),
        "Proof system:".bold(),
        "General:".bold()
    )
}

fn examples_text() -> String {
    "Examples:\n\
     \x20 primes 50\n\
     \x20 factor 360\n\
     \x20 gcd 48 18\n\
     \x20 euler 12\n\
     \x20 twins 100\n\
     \x20 collatz 27\n\
     \x20 crt 2,3,3,5"
        .to_string()
}

fn join(values: &[u64]) -> String {
    join_with(values, ", ")
}

fn join_with(values: &[u64], separator: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
