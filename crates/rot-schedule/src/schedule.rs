//! `Schedule` — the ordered set of event slots, and whole-schedule queries.
//!
//! A `Schedule` is read-only after [`ScheduleBuilder::build`](crate::ScheduleBuilder::build);
//! every query borrows it immutably, so one instance can serve any number of
//! threads.  To load new data, build a fresh `Schedule` and swap it in through
//! a [`ScheduleHandle`](crate::ScheduleHandle).

use std::collections::HashSet;

use rot_core::{CycleBounds, CycleTime, ItemId, SlotId, TrackId};

use crate::slot::{ActiveContent, EventSlot, Occurrence};

// ── Result values ─────────────────────────────────────────────────────────────

/// What one slot shows now, what it shows next, and how long until it changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotSnapshot {
    pub slot:      SlotId,
    pub slot_name: String,
    pub current:   ActiveContent,
    /// Content at the query time advanced by the slot's switch interval.
    pub upcoming:  ActiveContent,
    pub time_left: CycleTime,
}

/// Result of [`Schedule::find_item`]: where the item lives, and when it next
/// appears.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemLookup {
    pub slot:       SlotId,
    pub slot_name:  String,
    pub track:      TrackId,
    pub track_name: String,
    pub item:       ItemId,
    pub item_name:  String,
    pub occurrence: Occurrence,
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Schedule {
    bounds: CycleBounds,
    slots:  Vec<EventSlot>,
}

impl Schedule {
    pub(crate) fn new(bounds: CycleBounds, slots: Vec<EventSlot>) -> Self {
        Self { bounds, slots }
    }

    pub fn bounds(&self) -> CycleBounds {
        self.bounds
    }

    pub fn slots(&self) -> &[EventSlot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> &EventSlot {
        &self.slots[id.index()]
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// A `CycleTime` under this schedule's bounds.
    pub fn at(&self, cycle: i64, hour: i64, minute: i64, second: i64) -> CycleTime {
        CycleTime::new(self.bounds, cycle, hour, minute, second)
    }

    // ── Forward queries ───────────────────────────────────────────────────

    /// Current content, upcoming content and countdown for every slot.
    ///
    /// A `t` built under other bounds is renormalized under this schedule's.
    pub fn snapshot(&self, t: &CycleTime) -> Vec<SlotSnapshot> {
        let t = &t.with_bounds(self.bounds);
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let next = t.plus_hours(slot.switch_hours() as i64);
                SlotSnapshot {
                    slot:      SlotId(i as u16),
                    slot_name: slot.name().to_owned(),
                    current:   slot.active_content(t),
                    upcoming:  slot.active_content(&next),
                    time_left: slot.time_until_switch(t),
                }
            })
            .collect()
    }

    /// Snapshot at a hypothetical `hour:minute:second` of cycle 0.
    pub fn preview(&self, hour: i64, minute: i64, second: i64) -> Vec<SlotSnapshot> {
        self.snapshot(&self.at(0, hour, minute, second))
    }

    // ── Inverse queries ───────────────────────────────────────────────────

    /// Locate the item called `name` in the first slot (in slot order) that
    /// carries it, and compute its next occurrence from `from`.
    ///
    /// `None` when no slot carries the item.  Like [`snapshot`](Self::snapshot),
    /// `from` is renormalized under this schedule's bounds.
    pub fn find_item(&self, name: &str, from: &CycleTime) -> Option<ItemLookup> {
        let from = &from.with_bounds(self.bounds);
        self.slots.iter().enumerate().find_map(|(i, slot)| {
            let (track, item) = slot.locate(name)?;
            let occurrence = slot.next_occurrence(name, from)?;
            let rotation = slot.track(track);
            Some(ItemLookup {
                slot: SlotId(i as u16),
                slot_name: slot.name().to_owned(),
                track,
                track_name: rotation.name().to_owned(),
                item,
                item_name: rotation.item(item).name.clone(),
                occurrence,
            })
        })
    }

    /// Every item name in slot → track → item order, duplicates included.
    pub fn item_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots
            .iter()
            .flat_map(|slot| slot.tracks())
            .flat_map(|track| track.items())
            .map(|item| item.name.as_str())
    }

    /// Case-insensitive search over item names.
    ///
    /// Matches are ranked in three tiers: exact, then prefix, then substring.
    /// Within a tier, names keep their first-encountered order.  Each name is
    /// reported once.  A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&str> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let mut exact = Vec::new();
        let mut prefix = Vec::new();
        let mut substring = Vec::new();
        let mut seen = HashSet::new();

        for name in self.item_names() {
            if !seen.insert(name) {
                continue;
            }

            let haystack = name.to_lowercase();
            if haystack == needle {
                exact.push(name);
            } else if haystack.starts_with(&needle) {
                prefix.push(name);
            } else if haystack.contains(&needle) {
                substring.push(name);
            }
        }

        exact.extend(prefix);
        exact.extend(substring);
        exact
    }
}
