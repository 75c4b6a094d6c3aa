//! The synthetic instruction stream.

use crate::common::config::{INSTRUCTION_BASE, PROBE_GROUP, STREAM_LEN};
use crate::common::{Error, Result};
use crate::workload::Lcg;

/// An immutable, pre-generated instruction stream.
///
/// Generated once per process and shared read-only across every
/// (policy, pool size) combination, so that differences in hit rate are
/// attributable only to the policy and pool size, never to differing
/// inputs.
#[derive(Debug, Clone)]
pub struct Workload {
    instructions: Vec<u32>,
}

impl Workload {
    /// Generate the standard [`STREAM_LEN`]-entry stream from a seed.
    ///
    /// Each word is `10 * r / 65535 + INSTRUCTION_BASE` for a fresh 15-bit
    /// `r`, giving a narrow band of words in which `% 10 == 1` marks the
    /// writes.
    pub fn generate(seed: u32) -> Self {
        let mut rng = Lcg::new(seed);
        let instructions = (0..STREAM_LEN)
            .map(|_| 10 * rng.next_word() / 65535 + INSTRUCTION_BASE)
            .collect();

        Self { instructions }
    }

    /// Build a workload from a caller-supplied trace.
    ///
    /// The probe pattern needs at least one full probe group to draw
    /// indices from.
    pub fn from_instructions(instructions: Vec<u32>) -> Result<Self> {
        if instructions.len() < PROBE_GROUP {
            return Err(Error::WorkloadTooShort {
                len: instructions.len(),
            });
        }

        Ok(Self { instructions })
    }

    /// Number of instructions in the stream.
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True if the stream holds no instructions.
    ///
    /// Unreachable through the constructors; present for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instruction word at stream index `idx`.
    #[inline]
    pub fn instruction(&self, idx: usize) -> u32 {
        self.instructions[idx]
    }
}
