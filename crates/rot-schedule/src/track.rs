//! `RotationItem` and `RotationTrack`.
//!
//! # Rotation model
//!
//! A track is an ordered list of items, each active for the same
//! `active_hours`.  The track repeats every `period = active_hours * len`
//! hours.  With the owning slot's phase offset `p`, the item active at hour
//! `h` of the cycle is:
//!
//! ```text
//! shifted = (h - p) mod hours_per_cycle
//! index   = floor(shifted / active_hours) mod len
//! ```
//!
//! The period frequently does not divide the cycle length.  The rotation then
//! restarts from item 0 each time the shifted hour wraps, cutting the last run
//! short, so inverse lookups enumerate start hours instead of assuming a
//! closed form.

use rot_core::{CycleBounds, ItemId, true_mod};

// ── RotationItem ──────────────────────────────────────────────────────────────

/// One interchangeable piece of content (a map) in a track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationItem {
    pub name: String,
}

// ── RotationTrack ─────────────────────────────────────────────────────────────

/// A cyclically repeating list of items (a game mode).
///
/// Do not construct directly; use [`ScheduleBuilder`](crate::ScheduleBuilder),
/// which rejects empty tracks and a zero `active_hours`.
#[derive(Clone, Debug)]
pub struct RotationTrack {
    name:         String,
    items:        Vec<RotationItem>,
    active_hours: u32,
}

impl RotationTrack {
    pub(crate) fn new(name: String, items: Vec<RotationItem>, active_hours: u32) -> Self {
        debug_assert!(!items.is_empty(), "track must have items");
        debug_assert!(active_hours > 0, "active_hours must be > 0");
        Self { name, items, active_hours }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in rotation order.
    pub fn items(&self) -> &[RotationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Hours each item stays active.
    pub fn active_hours(&self) -> u32 {
        self.active_hours
    }

    /// Hours before the track repeats: `active_hours * len`.
    pub fn period_hours(&self) -> u64 {
        self.active_hours as u64 * self.items.len() as u64
    }

    pub fn item(&self, id: ItemId) -> &RotationItem {
        &self.items[id.index()]
    }

    /// First position of the item called `name`, if this track carries it.
    pub fn item_index(&self, name: &str) -> Option<ItemId> {
        self.item_indices(name).next()
    }

    /// Every position of the item called `name`.  A track may list the same
    /// item more than once.
    pub fn item_indices<'a>(&'a self, name: &'a str) -> impl Iterator<Item = ItemId> + 'a {
        self.items
            .iter()
            .enumerate()
            .filter(move |(_, it)| it.name == name)
            .map(|(i, _)| ItemId(i as u16))
    }

    // ── Forward lookup ────────────────────────────────────────────────────

    /// Index of the item active at `hour_in_cycle` under `phase_hours`.
    pub fn active_index(&self, hour_in_cycle: i64, phase_hours: i64, bounds: CycleBounds) -> ItemId {
        let shifted = true_mod(hour_in_cycle - phase_hours, bounds.hours_per_cycle() as i64);
        let index = true_mod(shifted / self.active_hours as i64, self.items.len() as i64);
        ItemId(index as u16)
    }

    /// The item active at `hour_in_cycle` under `phase_hours`.
    pub fn active_item(&self, hour_in_cycle: i64, phase_hours: i64, bounds: CycleBounds) -> &RotationItem {
        self.item(self.active_index(hour_in_cycle, phase_hours, bounds))
    }

    // ── Inverse lookup ────────────────────────────────────────────────────

    /// Every hour in `[0, hours_per_cycle)` at which this track's own
    /// periodicity starts `item`, ascending.
    ///
    /// ```text
    /// base       = (item * active_hours + phase) mod hours_per_cycle
    /// candidates = base, base + period, base + 2 * period, …  (< hours_per_cycle)
    /// ```
    ///
    /// The owning slot may select a different track at some of these hours;
    /// [`EventSlot::next_occurrence`](crate::EventSlot::next_occurrence)
    /// filters those out.
    pub(crate) fn candidate_start_hours(&self, item: ItemId, phase_hours: i64, bounds: CycleBounds) -> Vec<u32> {
        let hours_per_cycle = bounds.hours_per_cycle() as i64;
        let period = self.period_hours() as i64;
        let base = true_mod(item.0 as i64 * self.active_hours as i64 + phase_hours, hours_per_cycle);

        (0_i64..)
            .map(|k| base + k * period)
            .take_while(|&h| h < hours_per_cycle)
            .map(|h| h as u32)
            .collect()
    }
}
