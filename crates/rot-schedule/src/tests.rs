//! Unit tests for rot-schedule.

use rot_core::{CycleBounds, CycleTime, ItemId, SlotId, TrackId};

use crate::{EventSlot, Schedule, ScheduleBuilder, SlotSpec};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Two-week cycle, four cycles per epoch.
fn bounds() -> CycleBounds {
    CycleBounds::new(336, 4).unwrap()
}

fn at(hour: i64) -> CycleTime {
    CycleTime::new(bounds(), 0, hour, 0, 0)
}

/// One slot, two tracks of three 24 h maps, switching every 24 h.
///
/// Track 0 runs on even days, track 1 on odd days; the item index is
/// `day mod 3` in both.
fn two_mode_slot(phase_hours: u32) -> SlotSpec {
    SlotSpec::new("Main", 24, phase_hours)
        .track("Gem Grab", 24, ["Hard Rock Mine", "Crystal Arcade", "Undermine"])
        .track("Brawl Ball", 24, ["Backyard Bowl", "Pinhole Punt", "Triple Dribble"])
}

fn build(slots: impl IntoIterator<Item = SlotSpec>) -> Schedule {
    ScheduleBuilder::new(bounds()).slots(slots).build().unwrap()
}

fn main_slot(schedule: &Schedule) -> &EventSlot {
    schedule.slot(SlotId(0))
}

// ── RotationTrack ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod track {
    use super::*;

    fn abc(schedule: &Schedule) -> &crate::RotationTrack {
        schedule.slot(SlotId(0)).track(TrackId(0))
    }

    fn abc_schedule() -> Schedule {
        build([SlotSpec::new("Solo", 24, 0).track("Letters", 24, ["A", "B", "C"])])
    }

    #[test]
    fn active_item_rotates_every_active_hours() {
        let schedule = abc_schedule();
        let track = abc(&schedule);
        let name = |h| track.active_item(h, 0, bounds()).name.as_str();
        assert_eq!(name(0), "A");
        assert_eq!(name(23), "A");
        assert_eq!(name(24), "B");
        assert_eq!(name(71), "C");
        assert_eq!(name(72), "A");
    }

    #[test]
    fn active_item_respects_phase() {
        let schedule = abc_schedule();
        let track = abc(&schedule);
        // Phase 10: A starts at hour 10; hours 0..10 are the tail of the
        // previous lap (shifted hour 326 → index 13 mod 3 = 1).
        assert_eq!(track.active_item(10, 10, bounds()).name, "A");
        assert_eq!(track.active_item(34, 10, bounds()).name, "B");
        assert_eq!(track.active_item(0, 10, bounds()).name, "B");
    }

    #[test]
    fn period_hours() {
        let schedule = abc_schedule();
        assert_eq!(abc(&schedule).period_hours(), 72);
    }

    #[test]
    fn candidates_repeat_every_period() {
        let schedule = abc_schedule();
        let track = abc(&schedule);
        assert_eq!(track.candidate_start_hours(ItemId(0), 0, bounds()), vec![0, 72, 144, 216, 288]);
        assert_eq!(track.candidate_start_hours(ItemId(2), 0, bounds()), vec![48, 120, 192, 264]);
    }

    #[test]
    fn candidates_shift_with_phase() {
        let schedule = abc_schedule();
        let track = abc(&schedule);
        assert_eq!(track.candidate_start_hours(ItemId(0), 10, bounds()), vec![10, 82, 154, 226, 298]);
    }

    #[test]
    fn period_longer_than_cycle_yields_one_candidate() {
        let names: Vec<String> = (0..20).map(|i| format!("map{i}")).collect();
        let schedule = build([SlotSpec::new("Long", 24, 0).track("Many", 24, names)]);
        let track = schedule.slot(SlotId(0)).track(TrackId(0));
        assert_eq!(track.period_hours(), 480);
        assert_eq!(track.candidate_start_hours(ItemId(3), 0, bounds()), vec![72]);
    }

    #[test]
    fn item_indices_lists_every_position() {
        let schedule = build([SlotSpec::new("Solo", 24, 0).track("Letters", 24, ["A", "B", "A"])]);
        let track = schedule.slot(SlotId(0)).track(TrackId(0));
        let found: Vec<ItemId> = track.item_indices("A").collect();
        assert_eq!(found, vec![ItemId(0), ItemId(2)]);
        assert_eq!(track.item_index("A"), Some(ItemId(0)));
        assert_eq!(track.item_indices("Z").count(), 0);
    }

    #[test]
    fn item_index_lookup() {
        let schedule = abc_schedule();
        let track = abc(&schedule);
        assert_eq!(track.item_index("C"), Some(ItemId(2)));
        assert_eq!(track.item_index("c"), None);
    }
}

// ── EventSlot ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod slot {
    use super::*;

    #[test]
    fn end_to_end_track_selection() {
        let schedule = build([two_mode_slot(0)]);
        let slot = main_slot(&schedule);

        let (track, item) = slot.active_item(&at(0));
        assert_eq!(track.name(), "Gem Grab");
        assert_eq!(item.name, "Hard Rock Mine");

        assert_eq!(slot.active_track_index(&at(25)), TrackId(1));
        let (track, item) = slot.active_item(&at(25));
        assert_eq!(track.name(), "Brawl Ball");
        assert_eq!(item.name, "Pinhole Punt");

        assert_eq!(slot.active_indices(&at(48)), (TrackId(0), ItemId(2)));
        assert_eq!(slot.active_indices(&at(72)), (TrackId(1), ItemId(0)));
    }

    #[test]
    fn time_until_switch_at_interval_start() {
        let schedule = build([two_mode_slot(0)]);
        let left = main_slot(&schedule).time_until_switch(&at(0));
        assert_eq!(left.to_total_seconds(), 24 * 3600 - 1);
        assert_eq!((left.hour(), left.minute(), left.second()), (23, 59, 59));
    }

    #[test]
    fn time_until_switch_mid_interval() {
        let schedule = build([two_mode_slot(0)]);
        let t = CycleTime::new(bounds(), 0, 30, 15, 10);
        let left = main_slot(&schedule).time_until_switch(&t);
        assert_eq!((left.hour(), left.minute(), left.second()), (17, 44, 49));
    }

    #[test]
    fn time_until_switch_before_phase() {
        // Phase 12: the first switch of the cycle is at hour 12.
        let schedule = build([two_mode_slot(12)]);
        let left = main_slot(&schedule).time_until_switch(&at(5));
        assert_eq!((left.hour(), left.minute(), left.second()), (6, 59, 59));
    }

    #[test]
    fn time_until_switch_at_cycle_end() {
        let schedule = build([two_mode_slot(0)]);
        let t = CycleTime::new(bounds(), 3, 335, 0, 0);
        let left = main_slot(&schedule).time_until_switch(&t);
        assert_eq!(left.to_total_seconds(), 3599);
    }

    #[test]
    fn next_occurrence_filters_shadowed_candidates() {
        let schedule = build([two_mode_slot(0)]);
        let slot = main_slot(&schedule);

        // Track math proposes days 0, 3, 6, 9, 12; the slot runs Gem Grab on
        // even days only.
        let occ = slot.next_occurrence("Hard Rock Mine", &at(0)).unwrap();
        let hours: Vec<u32> = occ.start_times.iter().map(|t| t.hour()).collect();
        assert_eq!(hours, vec![0, 144, 288]);
        assert_eq!(occ.next_delta.unwrap().to_total_seconds(), 0);
        assert!(occ.active_now);

        // And Brawl Ball on odd days: 3 and 9.
        let occ = slot.next_occurrence("Backyard Bowl", &at(0)).unwrap();
        let hours: Vec<u32> = occ.start_times.iter().map(|t| t.hour()).collect();
        assert_eq!(hours, vec![72, 216]);
        assert!(!occ.active_now);
    }

    #[test]
    fn next_occurrence_moves_past_candidates_into_next_cycle() {
        let schedule = build([two_mode_slot(0)]);
        let slot = main_slot(&schedule);
        let from = CycleTime::new(bounds(), 0, 100, 0, 0);

        let occ = slot.next_occurrence("Hard Rock Mine", &from).unwrap();
        let starts: Vec<(u32, u32)> = occ.start_times.iter().map(|t| (t.cycle(), t.hour())).collect();
        assert_eq!(starts, vec![(0, 144), (0, 288), (1, 0)]);
        assert_eq!(occ.next_delta.unwrap(), CycleTime::from_hours(bounds(), 44));
        assert!(!occ.active_now);
    }

    #[test]
    fn next_occurrence_wraps_cycle_index_at_epoch_end() {
        let schedule = build([two_mode_slot(0)]);
        let from = CycleTime::new(bounds(), 3, 300, 0, 0);
        let occ = main_slot(&schedule).next_occurrence("Hard Rock Mine", &from).unwrap();
        let first = occ.start_times[0];
        assert_eq!((first.cycle(), first.hour()), (0, 0));
        assert_eq!(occ.next_delta.unwrap(), CycleTime::from_hours(bounds(), 36));
    }

    #[test]
    fn next_occurrence_unreachable_item() {
        // Two-map track: its item 0 always lands on even days, which belong
        // to track 0.
        let schedule = build([SlotSpec::new("Main", 24, 0)
            .track("Gem Grab", 24, ["Hard Rock Mine", "Crystal Arcade", "Undermine"])
            .track("Duels", 24, ["Skull Creek", "Rockwall Brawl"])]);
        let slot = main_slot(&schedule);

        let occ = slot.next_occurrence("Skull Creek", &at(0)).unwrap();
        assert!(occ.start_times.is_empty());
        assert_eq!(occ.next_delta, None);
        assert!(!occ.active_now);
        assert_eq!(occ.next_delta_secs(bounds().epoch_secs()), bounds().epoch_secs());

        let occ = slot.next_occurrence("Rockwall Brawl", &at(0)).unwrap();
        assert_eq!(occ.next_delta, Some(CycleTime::from_hours(bounds(), 24)));
    }

    #[test]
    fn next_occurrence_merges_repeated_positions() {
        let schedule = build([SlotSpec::new("Solo", 24, 0)
            .track("Gem Grab", 24, ["Hard Rock Mine", "Undermine", "Hard Rock Mine"])]);
        let slot = main_slot(&schedule);

        // Position 0 starts at 0, 72, …; position 2 at 48, 120, ….
        let occ = slot.next_occurrence("Hard Rock Mine", &at(0)).unwrap();
        let hours: Vec<u32> = occ.start_times.iter().map(|t| t.hour()).collect();
        assert_eq!(hours, vec![0, 48, 72, 120, 144, 192, 216, 264, 288]);
        assert!(occ.active_now);

        // Hour 50 shows position 2, which still counts as the item being up.
        let occ = slot.next_occurrence("Hard Rock Mine", &at(50)).unwrap();
        assert!(occ.active_now);
        assert_eq!(occ.next_delta, Some(CycleTime::from_hours(bounds(), 22)));
        let last: Vec<(u32, u32)> = occ.start_times[7..].iter().map(|t| (t.cycle(), t.hour())).collect();
        assert_eq!(last, vec![(1, 0), (1, 48)]);
    }

    #[test]
    fn next_occurrence_unknown_item() {
        let schedule = build([two_mode_slot(0)]);
        assert!(main_slot(&schedule).next_occurrence("Nowhere", &at(0)).is_none());
    }

    #[test]
    fn active_item_always_appears_among_its_start_times() {
        for phase in [0u32, 12] {
            let schedule = build([two_mode_slot(phase)]);
            let slot = main_slot(&schedule);

            for day in 0..14i64 {
                let h = phase as i64 + day * 24;
                let (_, item) = slot.active_item(&at(h));
                let expected = at(h);

                for from_hour in [0, h] {
                    let occ = slot.next_occurrence(&item.name, &at(from_hour)).unwrap();
                    assert!(
                        occ.start_times.contains(&expected),
                        "phase {phase}, hour {h}: {} missing from {:?}",
                        item.name,
                        occ.start_times
                    );
                }
            }
        }
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule {
    use super::*;

    fn two_slots() -> Schedule {
        build([
            two_mode_slot(0),
            SlotSpec::new("Showdown", 48, 12).track("Solo", 48, ["Skull Creek", "Cavern Churn"]),
        ])
    }

    #[test]
    fn snapshot_covers_every_slot() {
        let schedule = two_slots();
        let snap = schedule.snapshot(&at(0));
        assert_eq!(snap.len(), 2);

        let main = &snap[0];
        assert_eq!(main.slot, SlotId(0));
        assert_eq!(main.slot_name, "Main");
        assert_eq!(main.current.track_name, "Gem Grab");
        assert_eq!(main.current.item_name, "Hard Rock Mine");
        assert_eq!(main.upcoming.track_name, "Brawl Ball");
        assert_eq!(main.upcoming.item_name, "Pinhole Punt");
        assert_eq!(main.time_left.to_total_seconds(), 24 * 3600 - 1);

        // Phase 12, 48 h items: hour 0 is shifted hour 324 → index 6 mod 2 = 0.
        // The lap restarts at hour 12, so the next item is Skull Creek again.
        let showdown = &snap[1];
        assert_eq!(showdown.current.item_name, "Skull Creek");
        assert_eq!(showdown.upcoming.item_name, "Skull Creek");
        assert_eq!(showdown.time_left, CycleTime::new(bounds(), 0, 11, 59, 59));
    }

    #[test]
    fn preview_matches_snapshot_in_cycle_zero() {
        let schedule = two_slots();
        assert_eq!(schedule.preview(25, 30, 0), schedule.snapshot(&schedule.at(0, 25, 30, 0)));
    }

    #[test]
    fn find_item_uses_first_slot_in_order() {
        let schedule = build([
            two_mode_slot(0),
            SlotSpec::new("Backup", 24, 0).track("Gem Grab", 24, ["Hard Rock Mine"]),
        ]);
        let found = schedule.find_item("Hard Rock Mine", &at(0)).unwrap();
        assert_eq!(found.slot, SlotId(0));
        assert_eq!(found.track_name, "Gem Grab");
        assert_eq!(found.item, ItemId(0));
        assert!(found.occurrence.active_now);
    }

    #[test]
    fn find_item_in_later_slot() {
        let schedule = two_slots();
        let found = schedule.find_item("Cavern Churn", &at(0)).unwrap();
        assert_eq!(found.slot, SlotId(1));
        assert_eq!(found.slot_name, "Showdown");
        assert_eq!(found.track, TrackId(0));
        assert_eq!(found.item_name, "Cavern Churn");
        // Next start: phase 12 + 48 = hour 60.
        assert_eq!(found.occurrence.next_delta, Some(CycleTime::from_hours(bounds(), 60)));
    }

    #[test]
    fn queries_renormalize_foreign_bounds() {
        let schedule = two_slots();
        let two_days = CycleBounds::new(48, 1).unwrap();
        let foreign = CycleTime::new(two_days, 0, 25, 30, 0);
        let local = schedule.at(0, 25, 30, 0);

        let snap = schedule.snapshot(&foreign);
        assert_eq!(snap, schedule.snapshot(&local));
        assert_eq!(snap[0].time_left.bounds(), bounds());
        assert_eq!(
            schedule.find_item("Cavern Churn", &foreign),
            schedule.find_item("Cavern Churn", &local)
        );
    }

    #[test]
    fn find_item_not_found() {
        assert!(two_slots().find_item("Nowhere", &at(0)).is_none());
    }

    #[test]
    fn search_prefix_tier() {
        let schedule = build([SlotSpec::new("S", 24, 0).track("T", 24, ["Gem Grab", "Gem Mine", "Showdown"])]);
        assert_eq!(schedule.search("gem"), vec!["Gem Grab", "Gem Mine"]);
        assert_eq!(schedule.search("Gem G"), vec!["Gem Grab"]);
        assert_eq!(schedule.search("DOWN"), vec!["Showdown"]);
    }

    #[test]
    fn search_ranks_exact_then_prefix_then_substring() {
        let schedule = build([SlotSpec::new("S", 24, 0)
            .track("T", 24, ["Hidden Gem", "Gemstone Hollow", "Gem", "Safe Zone"])]);
        assert_eq!(schedule.search("gem"), vec!["Gem", "Gemstone Hollow", "Hidden Gem"]);
    }

    #[test]
    fn search_reports_each_name_once() {
        let schedule = build([
            SlotSpec::new("A", 24, 0).track("T", 24, ["Gem Grab"]),
            SlotSpec::new("B", 24, 0).track("T", 24, ["Gem Grab", "Gem Mine"]),
        ]);
        assert_eq!(schedule.search("gem"), vec!["Gem Grab", "Gem Mine"]);
    }

    #[test]
    fn search_blank_query_matches_nothing() {
        assert!(two_slots().search("  ").is_empty());
        assert!(two_slots().search("").is_empty());
    }

    #[test]
    fn item_names_in_config_order() {
        let schedule = two_slots();
        let names: Vec<&str> = schedule.item_names().collect();
        assert_eq!(names.len(), 8);
        assert_eq!(names[0], "Hard Rock Mine");
        assert_eq!(names[7], "Cavern Churn");
    }
}

// ── ScheduleBuilder ───────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use crate::ScheduleError;

    fn try_build(slot: SlotSpec) -> Result<Schedule, ScheduleError> {
        ScheduleBuilder::new(bounds()).slot(slot).build()
    }

    #[test]
    fn empty_schedule_is_allowed() {
        let schedule = ScheduleBuilder::new(bounds()).build().unwrap();
        assert!(schedule.is_empty());
        assert!(schedule.snapshot(&at(0)).is_empty());
    }

    #[test]
    fn rejects_slot_without_tracks() {
        let err = try_build(SlotSpec::new("Empty", 24, 0)).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptySlot { ref slot } if slot == "Empty"));
    }

    #[test]
    fn rejects_track_without_items() {
        let err = try_build(SlotSpec::new("S", 24, 0).track("Bare", 24, Vec::<String>::new())).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyTrack { ref track, .. } if track == "Bare"));
    }

    #[test]
    fn rejects_zero_switch_hours() {
        let err = try_build(SlotSpec::new("S", 0, 0).track("T", 24, ["A"])).unwrap_err();
        assert!(matches!(err, ScheduleError::ZeroSwitchHours { .. }));
    }

    #[test]
    fn rejects_zero_active_hours() {
        let err = try_build(SlotSpec::new("S", 24, 0).track("T", 0, ["A"])).unwrap_err();
        assert!(matches!(err, ScheduleError::ZeroActiveHours { .. }));
    }

    #[test]
    fn repeated_item_in_track_is_allowed() {
        let schedule = try_build(
            SlotSpec::new("Main", 24, 0).track("Gem Grab", 24, ["Hard Rock Mine", "Undermine", "Hard Rock Mine"]),
        )
        .unwrap();
        let track = main_slot(&schedule).track(TrackId(0));
        assert_eq!(track.len(), 3);
        assert_eq!(track.item(ItemId(2)).name, "Hard Rock Mine");
    }

    #[test]
    fn same_item_in_different_tracks_is_allowed() {
        let schedule = try_build(
            SlotSpec::new("S", 24, 0)
                .track("T1", 24, ["A"])
                .track("T2", 24, ["A"]),
        )
        .unwrap();
        assert_eq!(main_slot(&schedule).locate("A"), Some((TrackId(0), ItemId(0))));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{ScheduleError, load_schedule_reader, parse_slot_specs};

    const CSV: &str = "\
slot,switch_hours,phase_hours,track,active_hours,item\n\
Main,24,0,Gem Grab,24,Hard Rock Mine\n\
Main,24,0,Brawl Ball,24,Backyard Bowl\n\
Main,24,0,Gem Grab,24,Crystal Arcade\n\
Showdown,48,12,Solo,48,Skull Creek\n\
Main,24,0,Brawl Ball,24,Pinhole Punt\n\
";

    #[test]
    fn groups_rows_in_first_appearance_order() {
        let specs = parse_slot_specs(Cursor::new(CSV)).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "Main");
        assert_eq!(specs[0].tracks[0].name, "Gem Grab");
        assert_eq!(specs[0].tracks[0].items, vec!["Hard Rock Mine", "Crystal Arcade"]);
        assert_eq!(specs[0].tracks[1].items, vec!["Backyard Bowl", "Pinhole Punt"]);
        assert_eq!(specs[1].phase_hours, 12);
    }

    #[test]
    fn builds_queryable_schedule() {
        let schedule = load_schedule_reader(Cursor::new(CSV), bounds()).unwrap();
        assert_eq!(schedule.len(), 2);
        let snap = schedule.snapshot(&at(24));
        assert_eq!(snap[0].current.item_name, "Pinhole Punt");
    }

    #[test]
    fn conflicting_slot_settings_rejected() {
        let csv = "slot,switch_hours,phase_hours,track,active_hours,item\n\
                   Main,24,0,T,24,A\n\
                   Main,12,0,T,24,B\n";
        let err = parse_slot_specs(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(ref msg) if msg.contains("line 3")));
    }

    #[test]
    fn conflicting_track_duration_rejected() {
        let csv = "slot,switch_hours,phase_hours,track,active_hours,item\n\
                   Main,24,0,T,24,A\n\
                   Main,24,0,T,12,B\n";
        assert!(matches!(parse_slot_specs(Cursor::new(csv)), Err(ScheduleError::Parse(_))));
    }

    #[test]
    fn bad_number_is_parse_error() {
        let csv = "slot,switch_hours,phase_hours,track,active_hours,item\n\
                   Main,soon,0,T,24,A\n";
        assert!(matches!(
            load_schedule_reader(Cursor::new(csv), bounds()),
            Err(ScheduleError::Parse(_))
        ));
    }

    #[test]
    fn zero_duration_is_config_error() {
        let csv = "slot,switch_hours,phase_hours,track,active_hours,item\n\
                   Main,24,0,T,0,A\n";
        assert!(matches!(
            load_schedule_reader(Cursor::new(csv), bounds()),
            Err(ScheduleError::ZeroActiveHours { .. })
        ));
    }
}

// ── ScheduleHandle / RotationService ──────────────────────────────────────────

#[cfg(test)]
mod service {
    use std::sync::Arc;
    use std::thread;

    use rot_core::{EpochClock, RotError, RotationConfig};

    use super::*;
    use crate::{RotationService, ScheduleError, ScheduleHandle};

    const ANCHOR: i64 = 1_700_000_000_000;

    fn service() -> RotationService {
        RotationService::new(EpochClock::new(ANCHOR, bounds()), build([two_mode_slot(0)])).unwrap()
    }

    #[test]
    fn handle_replace_swaps_whole_schedule() {
        let handle = ScheduleHandle::new(build([two_mode_slot(0)]));
        let before = handle.load();
        let old = handle.replace(build([two_mode_slot(0), two_mode_slot(12)]));
        assert!(Arc::ptr_eq(&before, &old));
        assert_eq!(before.len(), 1);
        assert_eq!(handle.load().len(), 2);
    }

    #[test]
    fn mismatched_bounds_rejected() {
        let other = CycleBounds::new(168, 1).unwrap();
        let result = RotationService::new(EpochClock::new(ANCHOR, other), build([two_mode_slot(0)]));
        assert!(matches!(result, Err(ScheduleError::BoundsMismatch { .. })));
    }

    #[test]
    fn from_config_validates_bounds_and_slots() {
        let config = RotationConfig { anchor_unix_millis: ANCHOR, hours_per_cycle: 336, cycles_per_epoch: 4 };
        let svc = RotationService::from_config(&config, vec![two_mode_slot(0)]).unwrap();
        assert_eq!(svc.schedule().len(), 1);

        let zero = RotationConfig { hours_per_cycle: 0, ..config.clone() };
        let result = RotationService::from_config(&zero, vec![two_mode_slot(0)]);
        assert!(matches!(result, Err(ScheduleError::Bounds(RotError::ZeroHoursPerCycle))));

        let result = RotationService::from_config(&config, vec![SlotSpec::new("Empty", 24, 0)]);
        assert!(matches!(result, Err(ScheduleError::EmptySlot { .. })));
    }

    #[test]
    fn real_time_drives_snapshot() {
        let svc = service();
        // 25 h after the anchor.
        let t = svc.from_real_time(ANCHOR + 25 * 3_600_000);
        assert_eq!((t.cycle(), t.hour()), (0, 25));
        let snap = svc.get_snapshot(&t);
        assert_eq!(snap[0].current.track_name, "Brawl Ball");
        assert_eq!(snap[0].time_left, CycleTime::new(bounds(), 0, 22, 59, 59));
    }

    #[test]
    fn preview_and_search() {
        let svc = service();
        assert_eq!(svc.preview(48, 0, 0)[0].current.item_name, "Undermine");
        assert_eq!(svc.search("mine"), vec!["Hard Rock Mine", "Undermine"]);
        assert_eq!(svc.search("under"), vec!["Undermine"]);
    }

    #[test]
    fn find_item_at_and_not_found() {
        let svc = service();
        let found = svc.find_item_at("Crystal Arcade", &at(0)).unwrap();
        // Day 4 is the first even day with index 1.
        assert_eq!(found.occurrence.next_delta, Some(CycleTime::from_hours(bounds(), 96)));
        assert!(svc.find_item_at("Nowhere", &at(0)).is_none());
    }

    #[test]
    fn reload_is_visible_to_later_queries() {
        let svc = service();
        let pinned = svc.schedule();
        svc.reload(build([SlotSpec::new("New", 24, 0).track("Knockout", 24, ["Goldarm Gulch"])]))
            .unwrap();
        assert_eq!(pinned.slot(SlotId(0)).name(), "Main");
        assert_eq!(svc.preview(0, 0, 0)[0].current.item_name, "Goldarm Gulch");
        assert!(svc.find_item_at("Hard Rock Mine", &at(0)).is_none());
    }

    #[test]
    fn concurrent_queries_share_one_schedule() {
        let svc = Arc::new(service());
        let workers: Vec<_> = (0..4)
            .map(|i| {
                let svc = Arc::clone(&svc);
                thread::spawn(move || svc.preview(i * 24, 0, 0)[0].current.track_name.clone())
            })
            .collect();
        let tracks: Vec<String> = workers.into_iter().map(|w| w.join().unwrap()).collect();
        assert_eq!(tracks, vec!["Gem Grab", "Brawl Ball", "Gem Grab", "Brawl Ball"]);
    }
}
