//! CSV schedule loader.
//!
//! # CSV format
//!
//! One row per rotation item.  Rows for the same slot must agree on
//! `switch_hours` and `phase_hours`; rows for the same track (within a slot)
//! must agree on `active_hours`.
//!
//! ```csv
//! slot,switch_hours,phase_hours,track,active_hours,item
//! Main,24,0,Gem Grab,24,Hard Rock Mine
//! Main,24,0,Gem Grab,24,Crystal Arcade
//! Main,24,0,Heist,24,Safe Zone
//! Showdown,48,12,Solo,48,Skull Creek
//! ```
//!
//! Row order is rotation order: slots, tracks within a slot, and items within
//! a track are kept in order of first appearance.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use rot_core::CycleBounds;

use crate::builder::{ScheduleBuilder, SlotSpec, TrackSpec};
use crate::{Schedule, ScheduleError, ScheduleResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScheduleRecord {
    slot:         String,
    switch_hours: u32,
    phase_hours:  u32,
    track:        String,
    active_hours: u32,
    item:         String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a [`Schedule`] from a CSV file.
pub fn load_schedule_csv(path: &Path, bounds: CycleBounds) -> ScheduleResult<Schedule> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    debug!(path = %path.display(), "loading schedule CSV");
    load_schedule_reader(file, bounds)
}

/// Like [`load_schedule_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded data.
pub fn load_schedule_reader<R: Read>(reader: R, bounds: CycleBounds) -> ScheduleResult<Schedule> {
    let slots = parse_slot_specs(reader)?;
    info!(slots = slots.len(), "parsed schedule CSV");
    ScheduleBuilder::new(bounds).slots(slots).build()
}

/// Group CSV rows into unvalidated [`SlotSpec`]s, preserving row order.
pub fn parse_slot_specs<R: Read>(reader: R) -> ScheduleResult<Vec<SlotSpec>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut slots: Vec<SlotSpec> = Vec::new();

    for (line, result) in csv_reader.deserialize::<ScheduleRecord>().enumerate() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        // +2: one for the header, one for 1-based numbering.
        push_row(&mut slots, row, line + 2)?;
    }

    Ok(slots)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn push_row(slots: &mut Vec<SlotSpec>, row: ScheduleRecord, line: usize) -> ScheduleResult<()> {
    let slot = match slots.iter().position(|s| s.name == row.slot) {
        Some(i) => {
            let slot = &mut slots[i];
            if slot.switch_hours != row.switch_hours || slot.phase_hours != row.phase_hours {
                return Err(ScheduleError::Parse(format!(
                    "line {line}: slot {:?} redeclared with switch_hours={} phase_hours={} \
                     (first seen as {} / {})",
                    row.slot, row.switch_hours, row.phase_hours, slot.switch_hours, slot.phase_hours
                )));
            }
            slot
        }
        None => {
            slots.push(SlotSpec::new(row.slot.clone(), row.switch_hours, row.phase_hours));
            let last = slots.len() - 1;
            &mut slots[last]
        }
    };

    let track = match slot.tracks.iter().position(|t| t.name == row.track) {
        Some(i) => {
            let track = &mut slot.tracks[i];
            if track.active_hours != row.active_hours {
                return Err(ScheduleError::Parse(format!(
                    "line {line}: track {:?} redeclared with active_hours={} (first seen as {})",
                    row.track, row.active_hours, track.active_hours
                )));
            }
            track
        }
        None => {
            slot.tracks.push(TrackSpec {
                name:         row.track,
                active_hours: row.active_hours,
                items:        Vec::new(),
            });
            let last = slot.tracks.len() - 1;
            &mut slot.tracks[last]
        }
    };

    track.items.push(row.item);
    Ok(())
}
