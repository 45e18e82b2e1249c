//! Core error type.
//!
//! Time arithmetic is total and never fails; the only checked failure in this
//! crate is a degenerate [`CycleBounds`](crate::CycleBounds): a zero-length
//! cycle or epoch makes every modulo undefined, and an epoch longer than
//! `i64::MAX` milliseconds overflows real-time conversion.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotError {
    #[error("hours_per_cycle must be > 0")]
    ZeroHoursPerCycle,

    #[error("cycles_per_epoch must be > 0")]
    ZeroCyclesPerEpoch,

    #[error("epoch of {cycles_per_epoch} cycles x {hours_per_cycle} h does not fit in i64 milliseconds")]
    EpochTooLong { hours_per_cycle: u32, cycles_per_epoch: u32 },
}

/// Shorthand result type for `rot-core`.
pub type RotResult<T> = Result<T, RotError>;
