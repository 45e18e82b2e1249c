//! Fluent builder that validates configuration into a [`Schedule`].
//!
//! Configuration arrives as plain in-memory [`SlotSpec`] / [`TrackSpec`]
//! values (hand-built, or parsed by [`crate::loader`]).  Every structural
//! check happens here, once; a built `Schedule` is immutable and its queries
//! are total.
//!
//! ```rust,ignore
//! let bounds = CycleBounds::new(336, 4)?;
//! let schedule = ScheduleBuilder::new(bounds)
//!     .slot(
//!         SlotSpec::new("Main", 24, 0)
//!             .track("Gem Grab", 24, ["Hard Rock Mine", "Crystal Arcade"])
//!             .track("Heist", 24, ["Safe Zone", "Hot Potato"]),
//!     )
//!     .build()?;
//! ```

use tracing::{debug, info};

use rot_core::CycleBounds;

use crate::slot::EventSlot;
use crate::track::{RotationItem, RotationTrack};
use crate::{Schedule, ScheduleError, ScheduleResult};

/// Largest number of slots, tracks per slot, or items per track (ids are `u16`).
const MAX_ENTRIES: usize = u16::MAX as usize + 1;

// ── Specs ─────────────────────────────────────────────────────────────────────

/// Unvalidated description of one rotation track.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackSpec {
    pub name:         String,
    pub active_hours: u32,
    pub items:        Vec<String>,
}

/// Unvalidated description of one event slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotSpec {
    pub name:         String,
    pub switch_hours: u32,
    pub phase_hours:  u32,
    pub tracks:       Vec<TrackSpec>,
}

impl SlotSpec {
    pub fn new(name: impl Into<String>, switch_hours: u32, phase_hours: u32) -> Self {
        Self {
            name: name.into(),
            switch_hours,
            phase_hours,
            tracks: Vec::new(),
        }
    }

    /// Append a track with the given items, in rotation order.
    pub fn track<I, S>(mut self, name: impl Into<String>, active_hours: u32, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tracks.push(TrackSpec {
            name: name.into(),
            active_hours,
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }
}

// ── ScheduleBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Schedule`].
///
/// # Rejected configurations
///
/// | Condition                            | Error                              |
/// |--------------------------------------|------------------------------------|
/// | slot without tracks                  | [`ScheduleError::EmptySlot`]       |
/// | track without items                  | [`ScheduleError::EmptyTrack`]      |
/// | `switch_hours == 0`                  | [`ScheduleError::ZeroSwitchHours`] |
/// | `active_hours == 0`                  | [`ScheduleError::ZeroActiveHours`] |
/// | more than 65,536 slots/tracks/items  | [`ScheduleError::TooMany`]         |
pub struct ScheduleBuilder {
    bounds: CycleBounds,
    slots:  Vec<SlotSpec>,
}

impl ScheduleBuilder {
    pub fn new(bounds: CycleBounds) -> Self {
        Self { bounds, slots: Vec::new() }
    }

    /// Append one slot.  Slot order is query order.
    pub fn slot(mut self, slot: SlotSpec) -> Self {
        self.slots.push(slot);
        self
    }

    /// Append several slots.
    pub fn slots(mut self, slots: impl IntoIterator<Item = SlotSpec>) -> Self {
        self.slots.extend(slots);
        self
    }

    /// Validate every slot and track, and return an immutable [`Schedule`].
    pub fn build(self) -> ScheduleResult<Schedule> {
        check_count("slot", self.slots.len())?;

        let slots = self
            .slots
            .into_iter()
            .map(build_slot)
            .collect::<ScheduleResult<Vec<_>>>()?;

        info!(
            slots = slots.len(),
            hours_per_cycle = self.bounds.hours_per_cycle(),
            cycles_per_epoch = self.bounds.cycles_per_epoch(),
            "schedule built"
        );
        Ok(Schedule::new(self.bounds, slots))
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn build_slot(spec: SlotSpec) -> ScheduleResult<EventSlot> {
    if spec.tracks.is_empty() {
        return Err(ScheduleError::EmptySlot { slot: spec.name });
    }
    if spec.switch_hours == 0 {
        return Err(ScheduleError::ZeroSwitchHours { slot: spec.name });
    }
    check_count("track", spec.tracks.len())?;

    let tracks = spec
        .tracks
        .into_iter()
        .map(|t| build_track(&spec.name, t))
        .collect::<ScheduleResult<Vec<_>>>()?;

    debug!(
        slot = %spec.name,
        tracks = tracks.len(),
        switch_hours = spec.switch_hours,
        phase_hours = spec.phase_hours,
        "slot validated"
    );
    Ok(EventSlot::new(spec.name, tracks, spec.switch_hours, spec.phase_hours))
}

fn build_track(slot: &str, spec: TrackSpec) -> ScheduleResult<RotationTrack> {
    if spec.items.is_empty() {
        return Err(ScheduleError::EmptyTrack { slot: slot.to_owned(), track: spec.name });
    }
    if spec.active_hours == 0 {
        return Err(ScheduleError::ZeroActiveHours { slot: slot.to_owned(), track: spec.name });
    }
    check_count("item", spec.items.len())?;

    let items = spec
        .items
        .into_iter()
        .map(|name| RotationItem { name })
        .collect();
    Ok(RotationTrack::new(spec.name, items, spec.active_hours))
}

fn check_count(what: &'static str, got: usize) -> ScheduleResult<()> {
    if got > MAX_ENTRIES {
        return Err(ScheduleError::TooMany { what, got, max: MAX_ENTRIES });
    }
    Ok(())
}
