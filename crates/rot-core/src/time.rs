//! Cyclical time model.
//!
//! # Design
//!
//! A point in the rotation is a `CycleTime`: `(cycle, hour, minute, second)`
//! inside a fixed-length cycle, where the cycle counter itself wraps after
//! `cycles_per_epoch` cycles.  The two bounds travel with every value as a
//! [`CycleBounds`], so arithmetic always wraps against the same bounds as its
//! operands:
//!
//! ```text
//! total_secs = cycle * hours_per_cycle * 3600 + hour * 3600 + minute * 60 + second
//! 0 <= total_secs < hours_per_cycle * 3600 * cycles_per_epoch
//! ```
//!
//! The same type doubles as a duration (e.g. "time left in this interval").
//! Durations are never negative: subtracting past zero wraps forward.
//!
//! Every normalization routes through [`true_mod`], so `-1` seconds carries
//! to `59` seconds and a borrow from the minute, never to `-1`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use crate::{RotError, RotResult};

pub const SECS_PER_MINUTE: i64 = 60;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const SECS_PER_HOUR: i64 = SECS_PER_MINUTE * MINUTES_PER_HOUR;
pub const MILLIS_PER_SEC: i64 = 1_000;

/// Mathematical modulo: the result is always in `[0, modulus)`.
///
/// `true_mod(-1, 60) == 59`, unlike `-1 % 60 == -1`.
#[inline]
pub fn true_mod(value: i64, modulus: i64) -> i64 {
    debug_assert!(modulus > 0, "modulus must be > 0");
    value.rem_euclid(modulus)
}

/// Split `value` into `(remainder, carry)` against `bound`, so that
/// `carry * bound + remainder == value` and `remainder` is in `[0, bound)`.
#[inline]
fn carry(value: i64, bound: i64) -> (i64, i64) {
    let rem = true_mod(value, bound);
    (rem, (value - rem) / bound)
}

// ── CycleBounds ───────────────────────────────────────────────────────────────

/// The two constants that bound a [`CycleTime`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CycleBounds {
    hours_per_cycle:  u32,
    cycles_per_epoch: u32,
}

impl CycleBounds {
    /// Validate and construct bounds.
    ///
    /// Both values must be non-zero, and one epoch must fit in an `i64` count
    /// of milliseconds so that conversions to and from real time cannot
    /// overflow.
    pub fn new(hours_per_cycle: u32, cycles_per_epoch: u32) -> RotResult<Self> {
        if hours_per_cycle == 0 {
            return Err(RotError::ZeroHoursPerCycle);
        }
        if cycles_per_epoch == 0 {
            return Err(RotError::ZeroCyclesPerEpoch);
        }
        let epoch_millis = (hours_per_cycle as i64 * SECS_PER_HOUR)
            .checked_mul(cycles_per_epoch as i64)
            .and_then(|secs| secs.checked_mul(MILLIS_PER_SEC));
        if epoch_millis.is_none() {
            return Err(RotError::EpochTooLong { hours_per_cycle, cycles_per_epoch });
        }
        Ok(Self { hours_per_cycle, cycles_per_epoch })
    }

    #[inline]
    pub fn hours_per_cycle(&self) -> u32 {
        self.hours_per_cycle
    }

    #[inline]
    pub fn cycles_per_epoch(&self) -> u32 {
        self.cycles_per_epoch
    }

    /// Seconds in one cycle.
    #[inline]
    pub fn cycle_secs(&self) -> i64 {
        self.hours_per_cycle as i64 * SECS_PER_HOUR
    }

    /// Seconds in one full epoch (every cycle index once).  Never overflows:
    /// [`new`](Self::new) rejects bounds whose epoch is too long.
    #[inline]
    pub fn epoch_secs(&self) -> i64 {
        self.cycle_secs() * self.cycles_per_epoch as i64
    }
}

// ── CycleTime ─────────────────────────────────────────────────────────────────

/// A normalized point in (or duration within) the repeating cycle.
///
/// Immutable: every operation returns a new value.  Two values are equal iff
/// all four normalized fields and the bounds match; ordering is by
/// [`to_total_seconds`](Self::to_total_seconds).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CycleTime {
    cycle:  u32,
    hour:   u32,
    minute: u32,
    second: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    bounds: CycleBounds,
}

impl CycleTime {
    /// Build a time from possibly out-of-range or negative components.
    ///
    /// Carries propagate second → minute → hour → cycle, and the cycle index
    /// wraps modulo `cycles_per_epoch`.
    pub fn new(bounds: CycleBounds, cycle: i64, hour: i64, minute: i64, second: i64) -> Self {
        let (second, c) = carry(second, SECS_PER_MINUTE);
        let (minute, c) = carry(minute + c, MINUTES_PER_HOUR);
        let (hour, c) = carry(hour + c, bounds.hours_per_cycle as i64);
        let cycle = true_mod(cycle + c, bounds.cycles_per_epoch as i64);
        Self {
            cycle:  cycle as u32,
            hour:   hour as u32,
            minute: minute as u32,
            second: second as u32,
            bounds,
        }
    }

    /// Cycle 0, 00:00:00.
    pub fn zero(bounds: CycleBounds) -> Self {
        Self { cycle: 0, hour: 0, minute: 0, second: 0, bounds }
    }

    /// A duration of `hours` whole hours.
    pub fn from_hours(bounds: CycleBounds, hours: i64) -> Self {
        Self::new(bounds, 0, hours, 0, 0)
    }

    /// Decompose a second count (wrapped into one epoch).
    pub fn from_total_secs(bounds: CycleBounds, secs: i64) -> Self {
        Self::new(bounds, 0, 0, 0, secs)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> u32 {
        self.second
    }

    #[inline]
    pub fn bounds(&self) -> CycleBounds {
        self.bounds
    }

    /// The same components renormalized under `bounds`.
    pub fn with_bounds(self, bounds: CycleBounds) -> CycleTime {
        if bounds == self.bounds {
            return self;
        }
        CycleTime::new(
            bounds,
            self.cycle as i64,
            self.hour as i64,
            self.minute as i64,
            self.second as i64,
        )
    }

    // ── Arithmetic ────────────────────────────────────────────────────────

    /// Seconds since cycle 0, 00:00:00 of the epoch.
    #[inline]
    pub fn to_total_seconds(&self) -> i64 {
        self.cycle as i64 * self.bounds.cycle_secs()
            + self.hour as i64 * SECS_PER_HOUR
            + self.minute as i64 * SECS_PER_MINUTE
            + self.second as i64
    }

    #[inline]
    pub fn less_than(&self, other: &CycleTime) -> bool {
        self.to_total_seconds() < other.to_total_seconds()
    }

    /// `self` advanced by `hours` whole hours.
    pub fn plus_hours(self, hours: i64) -> CycleTime {
        CycleTime::new(
            self.bounds,
            self.cycle as i64,
            self.hour as i64 + hours,
            self.minute as i64,
            self.second as i64,
        )
    }
}

/// Component-wise sum, normalized against the left operand's bounds.
impl Add for CycleTime {
    type Output = CycleTime;

    fn add(self, rhs: CycleTime) -> CycleTime {
        debug_assert_eq!(self.bounds, rhs.bounds, "mixed cycle bounds");
        CycleTime::new(
            self.bounds,
            self.cycle as i64 + rhs.cycle as i64,
            self.hour as i64 + rhs.hour as i64,
            self.minute as i64 + rhs.minute as i64,
            self.second as i64 + rhs.second as i64,
        )
    }
}

/// Component-wise difference, normalized against the left operand's bounds.
///
/// Never negative: `a - b` is the forward distance from `b` to `a`, wrapping
/// through the end of the epoch when `b > a`.
impl Sub for CycleTime {
    type Output = CycleTime;

    fn sub(self, rhs: CycleTime) -> CycleTime {
        debug_assert_eq!(self.bounds, rhs.bounds, "mixed cycle bounds");
        CycleTime::new(
            self.bounds,
            self.cycle as i64 - rhs.cycle as i64,
            self.hour as i64 - rhs.hour as i64,
            self.minute as i64 - rhs.minute as i64,
            self.second as i64 - rhs.second as i64,
        )
    }
}

impl PartialOrd for CycleTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CycleTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_total_seconds()
            .cmp(&other.to_total_seconds())
            .then_with(|| self.bounds.cmp(&other.bounds))
    }
}

impl fmt::Display for CycleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C{} {:03}:{:02}:{:02}",
            self.cycle, self.hour, self.minute, self.second
        )
    }
}
