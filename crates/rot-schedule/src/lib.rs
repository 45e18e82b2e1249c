//! `rot-schedule` — rotation tracks, event slots, schedule queries, and CSV
//! loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`track`]    | `RotationItem`, `RotationTrack`                              |
//! | [`slot`]     | `EventSlot`, `ActiveContent`, `Occurrence`                   |
//! | [`schedule`] | `Schedule`, `SlotSnapshot`, `ItemLookup`                     |
//! | [`builder`]  | `ScheduleBuilder`, `SlotSpec`, `TrackSpec`                   |
//! | [`loader`]   | `load_schedule_csv`, `load_schedule_reader`                  |
//! | [`handle`]   | `ScheduleHandle` (`RwLock<Arc<Schedule>>`)                   |
//! | [`service`]  | `RotationService` — the query API                            |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                         |
//!
//! # Rotation model (summary)
//!
//! A `Schedule` owns `EventSlot`s, each slot owns `RotationTrack`s, each track
//! owns `RotationItem`s.  At cycle time `t`:
//!
//! ```text
//! track = floor(((t.hour - slot.phase) mod hours_per_cycle) / slot.switch) mod tracks
//! item  = floor(((t.hour - slot.phase) mod hours_per_cycle) / track.active) mod items
//! ```
//!
//! Inverse lookups ("when is map X next up?") enumerate the track's start
//! hours and keep those at which the slot selects that track.

pub mod builder;
pub mod error;
pub mod handle;
pub mod loader;
pub mod schedule;
pub mod service;
pub mod slot;
pub mod track;

#[cfg(test)]
mod tests;

pub use builder::{ScheduleBuilder, SlotSpec, TrackSpec};
pub use error::{ScheduleError, ScheduleResult};
pub use handle::ScheduleHandle;
pub use loader::{load_schedule_csv, load_schedule_reader, parse_slot_specs};
pub use schedule::{ItemLookup, Schedule, SlotSnapshot};
pub use service::RotationService;
pub use slot::{ActiveContent, EventSlot, Occurrence};
pub use track::{RotationItem, RotationTrack};
