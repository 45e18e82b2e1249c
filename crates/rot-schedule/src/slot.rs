//! `EventSlot` — one event position that switches between tracks.
//!
//! # Track selection
//!
//! A slot with `n` tracks, switch interval `s` and phase offset `p` shows, at
//! hour `h` of the cycle:
//!
//! ```text
//! shifted = (h - p) mod hours_per_cycle
//! track   = floor(shifted / s) mod n
//! item    = track.active_index(h, p)        // tracks inherit the slot's phase
//! ```
//!
//! # Inverse search
//!
//! `next_occurrence` runs in two stages:
//!
//! 1. the owning track proposes every hour at which its own rotation starts
//!    the item ([`RotationTrack::candidate_start_hours`]);
//! 2. the slot keeps only the candidates at which it actually selects that
//!    track.  A candidate can be shadowed by another track's turn.

use rot_core::{CycleTime, ItemId, TrackId, true_mod};

use crate::track::{RotationItem, RotationTrack};

// ── Result values ─────────────────────────────────────────────────────────────

/// The track and item a slot shows at some time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActiveContent {
    pub track:      TrackId,
    pub track_name: String,
    pub item:       ItemId,
    pub item_name:  String,
}

/// Answer to "when does this item next become active in this slot?".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Occurrence {
    /// Start times at or after the query time, one per surviving candidate,
    /// nearest first.  Candidates earlier in the cycle than the query hour
    /// are moved into the next cycle.
    pub start_times: Vec<CycleTime>,

    /// Forward distance to the nearest start time.  `None` if the slot never
    /// selects the item's track at any of its start hours.
    pub next_delta: Option<CycleTime>,

    /// `true` iff the slot shows this item at the query time.
    pub active_now: bool,
}

impl Occurrence {
    /// `next_delta` in seconds, with a full epoch standing in for
    /// "unreachable".
    pub fn next_delta_secs(&self, epoch_secs: i64) -> i64 {
        self.next_delta
            .map(|d| d.to_total_seconds())
            .unwrap_or(epoch_secs)
    }
}

// ── EventSlot ─────────────────────────────────────────────────────────────────

/// A container that cycles through tracks every `switch_hours`.
///
/// Do not construct directly; use [`ScheduleBuilder`](crate::ScheduleBuilder).
#[derive(Clone, Debug)]
pub struct EventSlot {
    name:         String,
    tracks:       Vec<RotationTrack>,
    switch_hours: u32,
    phase_hours:  u32,
}

impl EventSlot {
    pub(crate) fn new(name: String, tracks: Vec<RotationTrack>, switch_hours: u32, phase_hours: u32) -> Self {
        debug_assert!(!tracks.is_empty(), "slot must have tracks");
        debug_assert!(switch_hours > 0, "switch_hours must be > 0");
        Self { name, tracks, switch_hours, phase_hours }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> &[RotationTrack] {
        &self.tracks
    }

    pub fn track(&self, id: TrackId) -> &RotationTrack {
        &self.tracks[id.index()]
    }

    pub fn switch_hours(&self) -> u32 {
        self.switch_hours
    }

    pub fn phase_hours(&self) -> u32 {
        self.phase_hours
    }

    // ── Forward lookup ────────────────────────────────────────────────────

    /// Index of the track selected at `t`.
    pub fn active_track_index(&self, t: &CycleTime) -> TrackId {
        let hours_per_cycle = t.bounds().hours_per_cycle() as i64;
        let shifted = true_mod(t.hour() as i64 - self.phase_hours as i64, hours_per_cycle);
        let index = true_mod(shifted / self.switch_hours as i64, self.tracks.len() as i64);
        TrackId(index as u16)
    }

    /// The track selected at `t`.
    pub fn active_track(&self, t: &CycleTime) -> &RotationTrack {
        self.track(self.active_track_index(t))
    }

    /// Track and item indices shown at `t`.
    pub fn active_indices(&self, t: &CycleTime) -> (TrackId, ItemId) {
        let track_id = self.active_track_index(t);
        let item_id = self.track(track_id).active_index(
            t.hour() as i64,
            self.phase_hours as i64,
            t.bounds(),
        );
        (track_id, item_id)
    }

    /// The track and item shown at `t`.
    pub fn active_item(&self, t: &CycleTime) -> (&RotationTrack, &RotationItem) {
        let (track_id, item_id) = self.active_indices(t);
        let track = self.track(track_id);
        (track, track.item(item_id))
    }

    /// Owned copy of what is shown at `t`, for query results.
    pub fn active_content(&self, t: &CycleTime) -> ActiveContent {
        let (track, item) = self.active_indices(t);
        let rotation = self.track(track);
        ActiveContent {
            track,
            track_name: rotation.name().to_owned(),
            item,
            item_name: rotation.item(item).name.clone(),
        }
    }

    /// Time left until the next track switch, as a duration.
    ///
    /// The current interval ends at the last second before the boundary, so
    /// the countdown reaches `0:00:00` rather than going negative.
    pub fn time_until_switch(&self, t: &CycleTime) -> CycleTime {
        let phase = self.phase_hours as i64;
        let switch = self.switch_hours as i64;
        let shifted = t.hour() as i64 - phase;
        let next_boundary = (shifted.div_euclid(switch) + 1) * switch;

        let interval_end = CycleTime::new(t.bounds(), t.cycle() as i64, phase + next_boundary, 0, -1);
        interval_end - *t
    }

    // ── Inverse lookup ────────────────────────────────────────────────────

    /// Track and item position of the item called `name`, first match in
    /// track order.
    pub fn locate(&self, name: &str) -> Option<(TrackId, ItemId)> {
        self.tracks.iter().enumerate().find_map(|(i, track)| {
            track.item_index(name).map(|item| (TrackId(i as u16), item))
        })
    }

    /// When the item called `name` next starts in this slot, looking forward
    /// from `from`.  `None` if no track of this slot carries the item.
    ///
    /// Only the first track carrying the item is searched.  Within it, every
    /// position listing the item contributes start hours.
    pub fn next_occurrence(&self, name: &str, from: &CycleTime) -> Option<Occurrence> {
        let (track_id, _) = self.locate(name)?;
        let track = self.track(track_id);
        let bounds = from.bounds();
        let cycle = from.cycle() as i64;

        let mut hours: Vec<u32> = track
            .item_indices(name)
            .flat_map(|item| track.candidate_start_hours(item, self.phase_hours as i64, bounds))
            .collect();
        hours.sort_unstable();
        hours.dedup();

        let mut start_times: Vec<CycleTime> = hours
            .into_iter()
            .filter(|&hour| {
                let at = CycleTime::new(bounds, cycle, hour as i64, 0, 0);
                self.active_track_index(&at) == track_id
            })
            .map(|hour| {
                let wrap = i64::from(hour < from.hour());
                CycleTime::new(bounds, cycle + wrap, hour as i64, 0, 0)
            })
            .collect();

        start_times.sort_by_key(|&start| start - *from);
        let next_delta = start_times.first().map(|&start| start - *from);
        let active_now = self.active_item(from).1.name == name;

        Some(Occurrence { start_times, next_delta, active_now })
    }
}
