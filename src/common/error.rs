//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write
/// `Result<T>`. This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulation core itself has no recoverable errors: probe indices and
/// pool sizes are derived arithmetically and stay in range by construction.
/// What can go wrong is the configuration surface: a caller handing the
/// driver an unusable sweep description or a workload too short to probe.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Sweep step of zero would never advance past the first pool size.
    #[error("sweep step must be nonzero")]
    ZeroStep,

    /// Sweep range contains no pool sizes at all.
    #[error("sweep range is empty (min {min} > max {max})")]
    EmptySweep { min: usize, max: usize },

    /// A frame table cannot be built with zero frames.
    #[error("sweep would run a trial with zero frames")]
    ZeroPoolSize,

    /// The probe pattern needs at least one full probe group.
    #[error("workload must contain at least one probe group, got {len} instructions")]
    WorkloadTooShort { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptySweep { min: 64, max: 4 };
        assert_eq!(format!("{}", err), "sweep range is empty (min 64 > max 4)");

        let err = Error::WorkloadTooShort { len: 2 };
        assert_eq!(
            format!("{}", err),
            "workload must contain at least one probe group, got 2 instructions"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
