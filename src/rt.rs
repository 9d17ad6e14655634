//! # generator run time support
//!
//! error types shared by the generator engine, the oracle and the driver
//!

use thiserror::Error;

/// the crate result type
pub type Result<T> = std::result::Result<T, Error>;

/// generator and benchmark error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// resume called on a generator that already completed
    #[error("generator is already done")]
    Done,

    /// a computed sum disagrees with the checksum table
    #[error("Invalid result, n={n}, expected={expected}, actual={actual}")]
    ChecksumMismatch {
        /// number of values pulled
        n: u64,
        /// value recorded in the checksum table
        expected: i64,
        /// value the variant produced
        actual: i64,
    },

    /// multiplier is not a finite number in `[0, 1]`
    #[error("multiplier must be within [0, 1], got {0}")]
    InvalidMultiplier(f64),

    /// a command line flag or environment value could not be parsed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// the push stream producer could not be scheduled
    #[error("failed to spawn stream producer: {0}")]
    Spawn(String),
}

impl From<futures::task::SpawnError> for Error {
    fn from(e: futures::task::SpawnError) -> Self {
        Error::Spawn(e.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn test_mismatch_message() {
        let e = Error::ChecksumMismatch {
            n: 10,
            expected: 88,
            actual: 89,
        };
        assert_eq!(e.to_string(), "Invalid result, n=10, expected=88, actual=89");
    }

    #[test]
    fn test_done_message() {
        assert_eq!(Error::Done.to_string(), "generator is already done");
    }
}
