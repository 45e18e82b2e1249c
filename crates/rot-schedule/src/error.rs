use rot_core::{CycleBounds, RotError};
use thiserror::Error;

/// Configuration errors, raised once when a [`Schedule`](crate::Schedule) is
/// built.  Queries against a built schedule never fail.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid cycle bounds: {0}")]
    Bounds(#[from] RotError),

    #[error("slot {slot:?} has no tracks")]
    EmptySlot { slot: String },

    #[error("track {track:?} in slot {slot:?} has no items")]
    EmptyTrack { slot: String, track: String },

    #[error("track {track:?} in slot {slot:?} has active_hours = 0")]
    ZeroActiveHours { slot: String, track: String },

    #[error("slot {slot:?} has switch_hours = 0")]
    ZeroSwitchHours { slot: String },

    #[error("{what} count {got} exceeds the maximum of {max}")]
    TooMany { what: &'static str, got: usize, max: usize },

    #[error("schedule bounds {schedule:?} do not match clock bounds {clock:?}")]
    BoundsMismatch { clock: CycleBounds, schedule: CycleBounds },

    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
