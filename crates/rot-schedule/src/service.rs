//! `RotationService` — the query API consumed by a routing layer.
//!
//! Pairs an [`EpochClock`] (real time → cycle time) with a
//! [`ScheduleHandle`] (the live schedule).  Every query loads the current
//! schedule once and answers entirely from it, so a concurrent
//! [`reload`](RotationService::reload) never produces a mixed answer.
//!
//! | Method           | Backs                                          |
//! |------------------|------------------------------------------------|
//! | `current`        | "current events"                               |
//! | `get_snapshot`   | events at an explicit cycle time               |
//! | `preview`        | events at a hypothetical `h:m:s`               |
//! | `find_item`      | "when does map X appear"                       |
//! | `search`         | type-ahead over map names                      |
//! | `from_real_time` | translating a Unix timestamp                   |

use std::sync::Arc;

use tracing::info;

use rot_core::{CycleTime, EpochClock, RotationConfig};

use crate::{
    ItemLookup, Schedule, ScheduleBuilder, ScheduleError, ScheduleHandle, ScheduleResult, SlotSnapshot,
    SlotSpec,
};

pub struct RotationService {
    clock:    EpochClock,
    schedule: ScheduleHandle,
}

impl RotationService {
    /// Fails if the schedule was built for different cycle bounds than the
    /// clock produces.
    pub fn new(clock: EpochClock, schedule: Schedule) -> ScheduleResult<Self> {
        check_bounds(&clock, &schedule)?;
        Ok(Self { clock, schedule: ScheduleHandle::new(schedule) })
    }

    /// Validate `config` and `slots` together and start serving them.
    pub fn from_config(config: &RotationConfig, slots: Vec<SlotSpec>) -> ScheduleResult<Self> {
        let clock = config.make_clock()?;
        let schedule = ScheduleBuilder::new(clock.bounds).slots(slots).build()?;
        Self::new(clock, schedule)
    }

    pub fn clock(&self) -> &EpochClock {
        &self.clock
    }

    /// The schedule currently being served.
    pub fn schedule(&self) -> Arc<Schedule> {
        self.schedule.load()
    }

    // ── Time translation ──────────────────────────────────────────────────

    pub fn from_real_time(&self, unix_millis: i64) -> CycleTime {
        self.clock.at(unix_millis)
    }

    pub fn now(&self) -> CycleTime {
        self.clock.now()
    }

    // ── Forward queries ───────────────────────────────────────────────────

    pub fn get_snapshot(&self, t: &CycleTime) -> Vec<SlotSnapshot> {
        self.schedule.load().snapshot(t)
    }

    /// Snapshot at the current system time.
    pub fn current(&self) -> Vec<SlotSnapshot> {
        self.get_snapshot(&self.now())
    }

    /// Snapshot at a hypothetical time of day in cycle 0.  Callers reject
    /// non-numeric input before it gets here.
    pub fn preview(&self, hour: i64, minute: i64, second: i64) -> Vec<SlotSnapshot> {
        self.schedule.load().preview(hour, minute, second)
    }

    // ── Inverse queries ───────────────────────────────────────────────────

    /// Next occurrence of `name`, looking forward from the current time.
    pub fn find_item(&self, name: &str) -> Option<ItemLookup> {
        self.find_item_at(name, &self.now())
    }

    pub fn find_item_at(&self, name: &str, from: &CycleTime) -> Option<ItemLookup> {
        self.schedule.load().find_item(name, from)
    }

    /// Ranked item names matching `query`.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.schedule
            .load()
            .search(query)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    // ── Reload ────────────────────────────────────────────────────────────

    /// Atomically replace the served schedule.  Queries already running
    /// finish against the previous one.
    pub fn reload(&self, schedule: Schedule) -> ScheduleResult<()> {
        check_bounds(&self.clock, &schedule)?;
        let slots = schedule.len();
        self.schedule.replace(schedule);
        info!(slots, "schedule reloaded");
        Ok(())
    }
}

fn check_bounds(clock: &EpochClock, schedule: &Schedule) -> ScheduleResult<()> {
    if clock.bounds != schedule.bounds() {
        return Err(ScheduleError::BoundsMismatch {
            clock:    clock.bounds,
            schedule: schedule.bounds(),
        });
    }
    Ok(())
}
