//! Configuration constants for pagesim.

/// Length of the synthetic instruction stream.
///
/// Every trial replays exactly this many probes, so a trial's hit rate is
/// always `hits / STREAM_LEN`. The value is a power of two and a multiple of
/// [`PROBE_GROUP`], which keeps the probe pattern's outer loop exact.
pub const STREAM_LEN: usize = 8192;

/// Probes issued per step of the probe pattern.
pub const PROBE_GROUP: usize = 4;

/// Ten consecutive addresses map onto one simulated page.
///
/// A convention of the synthetic trace, not of the policies: the dispatcher
/// derives `page = address / ADDRESSES_PER_PAGE` and nothing else ever looks
/// at a raw address.
pub const ADDRESSES_PER_PAGE: u32 = 10;

/// An instruction word with this remainder mod 10 is a write.
///
/// Fixed by the workload generator; the NRU policy keys its modified flag
/// off this convention.
pub const WRITE_INSTRUCTION_REMAINDER: u32 = 1;

/// Lowest instruction word the generator emits.
pub const INSTRUCTION_BASE: u32 = 228;

/// NRU clears a frame's referenced flag once the frame has gone this many
/// ticks without service.
pub const NRU_STALENESS_TICKS: u64 = 20;

/// Bit position where Aging folds the referenced flag into the shift
/// register. Bit 8 gives a freshly referenced frame a score of 256 on top of
/// its access tally.
pub const AGING_REFERENCED_BIT: u32 = 8;

/// Seed for the per-trial probe generator.
///
/// Reseeding with the same constant at the start of every trial is what
/// makes the policies comparable: Aging and NRU see the identical probe
/// sequence at every pool size.
pub const PROBE_SEED: u32 = 10;

/// Seed for the instruction-stream generator.
pub const WORKLOAD_SEED: u32 = 54321;

/// Smallest pool size in the default sweep.
pub const SWEEP_MIN_FRAMES: usize = 4;

/// Largest pool size the default sweep may reach (inclusive bound).
pub const SWEEP_MAX_FRAMES: usize = 1024;

/// Pool-size increment between trials in the default sweep.
pub const SWEEP_STEP: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_len_divides_into_probe_groups() {
        assert_eq!(STREAM_LEN % PROBE_GROUP, 0);
        assert!(STREAM_LEN.is_power_of_two());
    }

    #[test]
    fn test_sweep_bounds_ordered() {
        assert!(SWEEP_MIN_FRAMES >= 1);
        assert!(SWEEP_MIN_FRAMES <= SWEEP_MAX_FRAMES);
        assert!(SWEEP_STEP > 0);
    }

    #[test]
    fn test_aging_bit_fits_counter() {
        assert!(AGING_REFERENCED_BIT < u32::BITS);
    }
}
