//! preview — smallest host for the rotation scheduler.
//!
//! Loads a rotation config (JSON, optional) and the embedded schedule CSV,
//! then prints, as JSON:
//!
//! 1. the current events,
//! 2. the events at a hypothetical cycle time,
//! 3. when a map next appears,
//! 4. type-ahead results for a query.
//!
//! ```text
//! preview [CONFIG.json] [MAP NAME] [QUERY]
//! RUST_LOG=debug preview            # show load-time logging
//! ```

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rot_core::{RotationConfig, unix_millis_now};
use rot_schedule::{RotationService, parse_slot_specs};

// ── Defaults ──────────────────────────────────────────────────────────────────

const ANCHOR_UNIX_MILLIS: i64 = 1_700_000_000_000; // cycle 0 starts here
const HOURS_PER_CYCLE:    u32 = 336;               // two weeks
const CYCLES_PER_EPOCH:   u32 = 4;

const DEFAULT_MAP:   &str = "Hard Rock Mine";
const DEFAULT_QUERY: &str = "gem";

// ── Schedule CSV ──────────────────────────────────────────────────────────────

// Main slot: two modes alternating daily, three daily maps each.
// Showdown slot: one mode, 48 h maps, offset by 12 h.
// Weekend slot: a 168 h switch between two modes with 24 h maps.
const SCHEDULE_CSV: &str = "\
slot,switch_hours,phase_hours,track,active_hours,item\n\
Main,24,0,Gem Grab,24,Hard Rock Mine\n\
Main,24,0,Gem Grab,24,Crystal Arcade\n\
Main,24,0,Gem Grab,24,Undermine\n\
Main,24,0,Brawl Ball,24,Backyard Bowl\n\
Main,24,0,Brawl Ball,24,Pinhole Punt\n\
Main,24,0,Brawl Ball,24,Triple Dribble\n\
Showdown,48,12,Solo Showdown,48,Skull Creek\n\
Showdown,48,12,Solo Showdown,48,Cavern Churn\n\
Showdown,48,12,Solo Showdown,48,Feast or Famine\n\
Weekend,168,0,Heist,24,Safe Zone\n\
Weekend,168,0,Heist,24,Hot Potato\n\
Weekend,168,0,Bounty,24,Shooting Star\n\
Weekend,168,0,Bounty,24,Layer Cake\n\
Weekend,168,0,Bounty,24,Gem Fort\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let map = args.next().unwrap_or_else(|| DEFAULT_MAP.to_owned());
    let query = args.next().unwrap_or_else(|| DEFAULT_QUERY.to_owned());

    // 1. Rotation config.
    let config = match config_path.as_deref() {
        Some(path) => read_config(Path::new(path))?,
        None => RotationConfig {
            anchor_unix_millis: ANCHOR_UNIX_MILLIS,
            hours_per_cycle:    HOURS_PER_CYCLE,
            cycles_per_epoch:   CYCLES_PER_EPOCH,
        },
    };

    // 2. Schedule.
    let slots = parse_slot_specs(Cursor::new(SCHEDULE_CSV)).context("reading schedule CSV")?;
    let service = RotationService::from_config(&config, slots).context("invalid rotation config")?;
    let clock = *service.clock();

    // 3. Queries.
    let now_millis = unix_millis_now();
    let now = service.from_real_time(now_millis);
    info!(%now, "resolved current cycle time");

    let lookup = service.find_item_at(&map, &now);
    let next_unix_millis = lookup
        .as_ref()
        .and_then(|l| l.occurrence.next_delta)
        .map(|delta| clock.unix_millis_after(now_millis, delta));

    let report = json!({
        "now": now.to_string(),
        "current": service.get_snapshot(&now),
        "preview_day_one_noon": service.preview(36, 0, 0),
        "lookup": {
            "map": map,
            "result": lookup,
            "next_unix_millis": next_unix_millis,
        },
        "search": {
            "query": query,
            "matches": service.search(&query),
        },
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_config(path: &Path) -> Result<RotationConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
