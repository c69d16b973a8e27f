//! replay: drive one simulated courier along a stored directions response.
//!
//! Creates an order through `TrackingService` with a manual clock, polls the
//! courier every `POLL_INTERVAL_MS` of simulated time until it arrives, and
//! writes every report to `replay_trace.csv`.
//!
//! ```text
//! cargo run -p replay                         # embedded sample route
//! cargo run -p replay -- route.json out_dir   # your own response
//! SIMULATION_SPEED=60 RUST_LOG=debug cargo run -p replay
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ct_core::{Clock, CourierId, EpochMs, ManualClock, TrackerConfig};
use ct_registry::{CourierReport, DriverPool, TrackingService};
use ct_route::{RouteProvider, StaticRouteProvider};

// ── Constants ─────────────────────────────────────────────────────────────────

const SAMPLE_ROUTE:     &str = include_str!("../data/sample_route.json");
const FROM:             &str = "Heidelberg Hauptbahnhof";
const TO:               &str = "Gaisbergstraße 73, Heidelberg";
const START:            EpochMs = EpochMs(1_700_000_000_000);
const POLL_INTERVAL_MS: i64 = 2_000;
const DRIVER_SEED:      u64 = 42;

// ── CSV row ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct TraceRow<'a> {
    elapsed_ms:   i64,
    status:       &'static str,
    progress:     u8,
    current_step: usize,
    total_steps:  usize,
    lat:          f64,
    lng:          f64,
    address:      &'a str,
    time_left:    &'a str,
}

impl<'a> TraceRow<'a> {
    fn new(elapsed_ms: i64, report: &'a CourierReport) -> Self {
        let p = &report.position;
        Self {
            elapsed_ms,
            status:       report.status.as_str(),
            progress:     p.progress_percent,
            current_step: p.current_step_number,
            total_steps:  p.total_steps,
            lat:          p.position.lat,
            lng:          p.position.lng,
            address:      p.address.as_deref().unwrap_or(""),
            time_left:    &p.remaining_time,
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let route_path = args.next().map(PathBuf::from);
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    // 1. Route provider from a stored directions response.
    let body = match &route_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => SAMPLE_ROUTE.to_string(),
    };
    let provider = StaticRouteProvider::from_geojson(&body).context("decoding directions response")?;

    // 2. Service on a manual clock.
    let config = TrackerConfig::from_env()?;
    let clock = Arc::new(ManualClock::new(START));
    let service = TrackingService::new(provider, Arc::clone(&clock), config)
        .with_drivers(DriverPool::seeded(Vec::new(), DRIVER_SEED));

    let receipt = service.create_order(FROM, TO)?;
    info!(
        courier = %receipt.id,
        driver = %receipt.driver.name,
        distance = %receipt.route_info.total_distance,
        duration = %receipt.route_info.total_duration,
        speed = service.config().speed_multiplier,
        "order accepted"
    );
    println!("{}", serde_json::to_string_pretty(&receipt)?);

    // 3. Poll until arrival, then once more to show the pinned snapshot.
    let rows = replay(&service, &clock, receipt.id, &out_dir.join("replay_trace.csv"))?;
    info!(rows, out = %out_dir.display(), "trace written");
    Ok(())
}

fn replay<P: RouteProvider>(
    service: &TrackingService<P, Arc<ManualClock>>,
    clock:   &ManualClock,
    id:      CourierId,
    out:     &Path,
) -> Result<usize> {
    let mut writer = csv::Writer::from_path(out)
        .with_context(|| format!("creating {}", out.display()))?;

    let mut rows = 0;
    let mut extra_polls = 1;
    loop {
        let report = service.courier(id)?;
        let elapsed = clock.now() - START;
        writer.serialize(TraceRow::new(elapsed, &report))?;
        rows += 1;

        if report.status.is_completed() {
            if extra_polls == 0 {
                println!("{}", serde_json::to_string_pretty(&report)?);
                break;
            }
            extra_polls -= 1;
        } else if rows % 10 == 1 {
            info!(
                progress = report.position.progress_percent,
                address = report.position.address.as_deref().unwrap_or("-"),
                time_left = %report.position.remaining_time,
                "courier en route"
            );
        }
        clock.advance(POLL_INTERVAL_MS);
    }

    writer.flush()?;
    Ok(rows)
}
