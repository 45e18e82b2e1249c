//! `ScheduleHandle` — shared access to the live schedule with whole-value swap.
//!
//! Readers take an `Arc<Schedule>` snapshot and query it without holding any
//! lock.  A reload replaces the whole `Arc`; queries already in flight keep
//! the schedule they started with.  No field of a live `Schedule` is ever
//! mutated.

use std::sync::{Arc, PoisonError, RwLock};

use crate::Schedule;

#[derive(Debug)]
pub struct ScheduleHandle {
    current: RwLock<Arc<Schedule>>,
}

impl ScheduleHandle {
    pub fn new(schedule: Schedule) -> Self {
        Self { current: RwLock::new(Arc::new(schedule)) }
    }

    /// The schedule live at the time of the call.
    pub fn load(&self) -> Arc<Schedule> {
        // The lock only guards an `Arc` swap, so a poisoned lock still holds a
        // complete schedule.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Swap in `schedule`, returning the one it replaced.
    pub fn replace(&self, schedule: Schedule) -> Arc<Schedule> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(schedule))
    }
}
