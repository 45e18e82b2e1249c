//! Mapping real time onto the rotation cycle.
//!
//! The rotation is anchored to one reference instant.  Any real timestamp is
//! reduced to seconds since that anchor, wrapped into one epoch, and
//! decomposed into a [`CycleTime`]:
//!
//! ```text
//! rel = (floor(unix_ms / 1000) - floor(anchor_ms / 1000)) mod epoch_secs
//! ```
//!
//! Timestamps before the anchor wrap backwards through the epoch like any
//! other negative offset.  No calendar, time zone or leap-second handling
//! takes place.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::time::{MILLIS_PER_SEC, true_mod};
use crate::{CycleBounds, CycleTime, RotResult};

/// Convert a real elapsed-time value into a position in the cycle.
pub fn from_real_time(elapsed_millis: i64, anchor_millis: i64, bounds: CycleBounds) -> CycleTime {
    let total_secs = elapsed_millis.div_euclid(MILLIS_PER_SEC);
    let anchor_secs = anchor_millis.div_euclid(MILLIS_PER_SEC);
    let rel = true_mod(total_secs - anchor_secs, bounds.epoch_secs());
    CycleTime::from_total_secs(bounds, rel)
}

// ── EpochClock ────────────────────────────────────────────────────────────────

/// Translates Unix milliseconds into [`CycleTime`]s for one anchored rotation.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EpochClock {
    /// Unix timestamp (milliseconds) of cycle 0, 00:00:00.
    pub anchor_unix_millis: i64,
    pub bounds:             CycleBounds,
}

impl EpochClock {
    pub fn new(anchor_unix_millis: i64, bounds: CycleBounds) -> Self {
        Self { anchor_unix_millis, bounds }
    }

    /// Position in the cycle at `unix_millis`.
    #[inline]
    pub fn at(&self, unix_millis: i64) -> CycleTime {
        from_real_time(unix_millis, self.anchor_unix_millis, self.bounds)
    }

    /// Position in the cycle at the current system time.
    pub fn now(&self) -> CycleTime {
        self.at(unix_millis_now())
    }

    /// Real timestamp reached `delta` after `from_unix_millis`.
    ///
    /// Used to turn a countdown into a wall-clock instant for display.
    /// Saturates at `i64::MAX`.
    pub fn unix_millis_after(&self, from_unix_millis: i64, delta: CycleTime) -> i64 {
        from_unix_millis.saturating_add(delta.to_total_seconds() * MILLIS_PER_SEC)
    }
}

/// Current Unix time in milliseconds.  A clock set before 1970 reads as 0.
pub fn unix_millis_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

// ── RotationConfig ────────────────────────────────────────────────────────────

/// Top-level rotation configuration.
///
/// Typically loaded from a JSON/TOML file by the hosting application and
/// turned into an [`EpochClock`] at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationConfig {
    /// Unix timestamp (milliseconds) at which cycle 0 begins.
    pub anchor_unix_millis: i64,

    /// Length of one cycle in hours.  336 = two weeks.
    pub hours_per_cycle: u32,

    /// Cycles before the cycle index wraps back to 0.
    pub cycles_per_epoch: u32,
}

impl RotationConfig {
    /// Validated bounds for this rotation.
    pub fn bounds(&self) -> RotResult<CycleBounds> {
        CycleBounds::new(self.hours_per_cycle, self.cycles_per_epoch)
    }

    /// Construct an `EpochClock` for this rotation.
    pub fn make_clock(&self) -> RotResult<EpochClock> {
        Ok(EpochClock::new(self.anchor_unix_millis, self.bounds()?))
    }
}
