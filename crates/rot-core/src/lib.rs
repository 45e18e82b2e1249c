//! `rot-core` — foundational types for the rotation scheduler.
//!
//! This crate is a dependency of every other `rot-*` crate.  It has no `rot-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`time`]    | `CycleBounds`, `CycleTime`, `true_mod`                    |
//! | [`epoch`]   | `from_real_time`, `EpochClock`, `RotationConfig`          |
//! | [`ids`]     | `SlotId`, `TrackId`, `ItemId`                             |
//! | [`error`]   | `RotError`, `RotResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize` (and `Deserialize` where it cannot break  |
//! |         | normalization) to public types.                            |

pub mod epoch;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use epoch::{EpochClock, RotationConfig, from_real_time, unix_millis_now};
pub use error::{RotError, RotResult};
pub use ids::{ItemId, SlotId, TrackId};
pub use time::{CycleBounds, CycleTime, true_mod};
