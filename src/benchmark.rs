//! Benchmark Harness
//!
//! Timing-over-iterations measurement of the toolkit's algorithms as black
//! boxes. Results carry summary statistics only (mean, spread, extremes);
//! anything heavier belongs in the criterion benches under `benches/`.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::core::{gcd, is_prime};
use crate::number_theory::{fibonacci_sequence, perfect_numbers_up_to};
use crate::sieve::sieve;

/// Summary of one timed run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub name: String,
    pub input_size: u64,
    pub iterations: usize,
    pub total_time: Duration,
    pub mean_time: Duration,
    pub std_deviation: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
}

/// Accumulates benchmark results across runs.
#[derive(Debug, Default)]
pub struct PerformanceBenchmark {
    results: Vec<BenchmarkResult>,
}

impl PerformanceBenchmark {
    pub fn new() -> Self {
        PerformanceBenchmark::default()
    }

    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    /// Time a closure over `iterations` runs (plus one untimed warmup) and
    /// record the summary.
    pub fn time_function<F>(
        &mut self,
        name: impl Into<String>,
        input_size: u64,
        iterations: usize,
        mut f: F,
    ) -> BenchmarkResult
    where
        F: FnMut(),
    {
        let iterations = iterations.max(1);
        f();

        let mut times = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            let start = Instant::now();
            f();
            times.push(start.elapsed());
        }

        let result = summarize(name.into(), input_size, &times);
        self.results.push(result.clone());
        result
    }

    /// Sieve generation across a range of limits.
    pub fn benchmark_sieve(&mut self, limits: &[u64], iterations: usize) {
        for &limit in limits {
            self.time_function("sieve", limit, iterations, || {
                black_box(sieve(black_box(limit)));
            });
        }
    }

    /// Fibonacci sequence generation across sequence lengths.
    pub fn benchmark_fibonacci(&mut self, counts: &[usize], iterations: usize) {
        for &count in counts {
            self.time_function("fibonacci_sequence", count as u64, iterations, || {
                black_box(fibonacci_sequence(black_box(count)));
            });
        }
    }

    /// Primality testing of single values.
    pub fn benchmark_prime_checking(&mut self, values: &[u64], iterations: usize) {
        for &n in values {
            self.time_function("is_prime", n, iterations, || {
                black_box(is_prime(black_box(n)));
            });
        }
    }

    /// Perfect-number search up to each limit.
    pub fn benchmark_perfect_numbers(&mut self, limits: &[u64], iterations: usize) {
        for &limit in limits {
            self.time_function("perfect_numbers_up_to", limit, iterations, || {
                black_box(perfect_numbers_up_to(black_box(limit)));
            });
        }
    }

    /// Gcd over a fixed batch of pairs; input_size records the batch length.
    pub fn benchmark_gcd(&mut self, pairs: &[(i64, i64)], iterations: usize) {
        self.time_function("gcd", pairs.len() as u64, iterations, || {
            for &(a, b) in pairs {
                let _ = black_box(gcd(black_box(a), black_box(b)));
            }
        });
    }

    /// Render the accumulated results as an aligned text table.
    pub fn generate_report(&self) -> String {
        let mut report = String::from(
            "function                  size      iters      mean        std dev     min         max\n",
        );
        for r in &self.results {
            report.push_str(&format!(
                "{:<24} {:>8} {:>8} {:>11.3?} {:>11.3?} {:>11.3?} {:>11.3?}\n",
                r.name, r.input_size, r.iterations, r.mean_time, r.std_deviation, r.min_time,
                r.max_time
            ));
        }
        report
    }
}

fn summarize(name: String, input_size: u64, times: &[Duration]) -> BenchmarkResult {
    let total_time: Duration = times.iter().sum();
    let count = times.len() as f64;
    let mean_secs = total_time.as_secs_f64() / count;
    let variance = times
        .iter()
        .map(|t| {
            let diff = t.as_secs_f64() - mean_secs;
            diff * diff
        })
        .sum::<f64>()
        / count;

    BenchmarkResult {
        name,
        input_size,
        iterations: times.len(),
        total_time,
        mean_time: Duration::from_secs_f64(mean_secs),
        std_deviation: Duration::from_secs_f64(variance.sqrt()),
        min_time: times.iter().min().copied().unwrap_or_default(),
        max_time: times.iter().max().copied().unwrap_or_default(),
    }
}

/// Run every canned suite with small default inputs and return the loaded
/// harness.
pub fn run_performance_analysis() -> PerformanceBenchmark {
    let mut benchmark = PerformanceBenchmark::new();
    benchmark.benchmark_sieve(&[1_000, 10_000, 100_000], 5);
    benchmark.benchmark_fibonacci(&[10, 50, 90], 10);
    benchmark.benchmark_prime_checking(&[7_919, 999_983, 67_867_967], 10);
    benchmark.benchmark_perfect_numbers(&[1_000, 10_000], 3);
    benchmark.benchmark_gcd(&[(48, 18), (7919, 6761), (123_456_789, 987_654_321)], 10);
    benchmark
}
