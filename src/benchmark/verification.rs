use crate::error::{BenchError, Result};
use super::types::{Algorithm, Distribution};
use std::collections::HashMap;
use tracing::{debug, error};

/// Location of the output being checked, carried into error reports.
#[derive(Clone, Copy, Debug)]
pub struct VerifyContext {
    pub algorithm: Algorithm,
    pub dataset: Distribution,
    pub size: usize,
}

impl VerifyContext {
    fn fail(&self, reason: String) -> BenchError {
        BenchError::Verification {
            algorithm: self.algorithm.name().to_string(),
            dataset: self.dataset.name().to_string(),
            size: self.size,
            reason,
        }
    }
}

pub trait OutputVerifier {
    fn verify(&self, ctx: &VerifyContext, input: &[i64], output: &[i64]) -> Result<()>;
}

/// Checks that an output is a non-decreasing permutation of its input.
pub struct SimpleVerifier {
    pub print_sample: bool,
}

impl SimpleVerifier {
    pub fn new() -> Self {
        Self { print_sample: true }
    }

    pub fn new_quiet() -> Self {
        Self {
            print_sample: false,
        }
    }
}

impl Default for SimpleVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputVerifier for SimpleVerifier {
    fn verify(&self, ctx: &VerifyContext, input: &[i64], output: &[i64]) -> Result<()> {
        if input.len() != output.len() {
            return Err(ctx.fail(format!(
                "length mismatch: input has {} elements, output has {}",
                input.len(),
                output.len()
            )));
        }

        if let Some(pos) = output.windows(2).position(|w| w[0] > w[1]) {
            error!(
                "Sort order violation at record {}: {} > {}",
                pos + 1,
                output[pos],
                output[pos + 1]
            );
            return Err(ctx.fail(format!("sort order violation at record {}", pos + 1)));
        }

        let mut counts: HashMap<i64, isize> = HashMap::with_capacity(input.len());
        for v in input {
            *counts.entry(*v).or_insert(0) += 1;
        }
        for v in output {
            *counts.entry(*v).or_insert(0) -= 1;
        }
        if let Some((value, diff)) = counts.into_iter().find(|(_, c)| *c != 0) {
            return Err(ctx.fail(format!(
                "output is not a permutation of the input (value {} off by {})",
                value, diff
            )));
        }

        if self.print_sample {
            let head: Vec<i64> = output.iter().take(5).copied().collect();
            let tail: Vec<i64> = output.iter().rev().take(5).rev().copied().collect();
            debug!(
                "Verified {} records for {} on {}: first {:?}, last {:?}",
                output.len(),
                ctx.algorithm,
                ctx.dataset,
                head,
                tail
            );
        }

        Ok(())
    }
}
