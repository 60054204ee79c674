use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use rand::{rngs::SmallRng, SeedableRng};

use crate::mismatch_matrix::MismatchMatrix;
use crate::partition::worker_range;
use crate::string_set::StringSet;

// Every run seeds its generator with this constant, so a given problem size
// always produces the same strings and the same distances.
pub const GENERATOR_SEED: u64 = 0;

// Sizes for one run: group A, group B, the shared string length, and the
// worker thread count.
pub struct RunConfig {
    pub group_a: usize,
    pub group_b: usize,
    pub string_len: usize,
    pub threads: usize,
}

impl RunConfig {
    // Reject degenerate sizes before anything is allocated. Zero sizes and a
    // comparison space too large to index are both configuration errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.group_a == 0 {
            return Err(ConfigError::new("group A size (m) must be positive"));
        }
        if self.group_b == 0 {
            return Err(ConfigError::new("group B size (n) must be positive"));
        }
        if self.string_len == 0 {
            return Err(ConfigError::new("string length (l) must be positive"));
        }
        if self.threads == 0 {
            return Err(ConfigError::new("thread count must be positive"));
        }
        if self
            .group_a
            .checked_mul(self.group_b)
            .and_then(|pairs| pairs.checked_mul(self.string_len))
            .is_none()
        {
            return Err(ConfigError::new(
                "comparison space m * n * l overflows the address space",
            ));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct ConfigError {
    details: String,
}

impl ConfigError {
    fn new(msg: &str) -> ConfigError {
        ConfigError {
            details: msg.to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for ConfigError {}

// Result of one timed comparison: the per-pair distances, their sum, and how
// long the parallel phase took.
pub struct Comparison {
    pub matrix: MismatchMatrix,
    pub total: u64,
    pub elapsed: Duration,
}

// What a full run reports once the strings and the matrix are gone.
pub struct RunReport {
    pub total_mismatches: u64,
    pub elapsed: Duration,
}

// Compare every string of `a` against every string of `b`, character by
// character, on a pool of exactly `threads` workers.
//
// The iteration space is the flattened cross product (i, j, p): string i of
// A against string j of B at position p. Each worker walks one statically
// assigned contiguous slice of that space, keeps a local mismatch count, and
// bumps the matrix cell of the pair on every hit. Local counts are summed
// after the pool joins, so the cell increments are the only contended writes.
pub fn compare_all_pairs(a: &StringSet, b: &StringSet, threads: usize) -> Comparison {
    assert_eq!(
        a.string_len(),
        b.string_len(),
        "Both groups must use one string length"
    );
    assert!(threads > 0, "At least one worker thread is required");

    let string_len = a.string_len();
    // Flat indices covered by one A string.
    let row_span = b.len() * string_len;
    let total_work = a.len() * row_span;
    let matrix = MismatchMatrix::new(a.len(), b.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .expect("Failed to build the worker pool");

    // Time the comparison alone: generation, matrix allocation and pool
    // spawning all sit outside this window.
    let start = Instant::now();
    let partials = pool.broadcast(|context| {
        let mut local: u64 = 0;
        for flat in worker_range(context.index(), context.num_threads(), total_work) {
            let i = flat / row_span;
            let j = flat % row_span / string_len;
            let p = flat % string_len;
            if a.get(i)[p] != b.get(j)[p] {
                local += 1;
                matrix.increment(i, j);
            }
        }
        local
    });
    let elapsed = start.elapsed();

    Comparison {
        matrix,
        total: partials.into_iter().sum(),
        elapsed,
    }
}

// One full run: validate the sizes, generate both groups from the fixed seed
// (group A first, then group B), compare, and report the scalar results.
// The string sets and the matrix never leave this function.
pub fn run(config: &RunConfig) -> Result<RunReport, ConfigError> {
    config.validate()?;
    let mut rng = SmallRng::seed_from_u64(GENERATOR_SEED);
    let a = StringSet::random(config.group_a, config.string_len, &mut rng);
    let b = StringSet::random(config.group_b, config.string_len, &mut rng);
    let comparison = compare_all_pairs(&a, &b, config.threads);
    Ok(RunReport {
        total_mismatches: comparison.total,
        elapsed: comparison.elapsed,
    })
}
