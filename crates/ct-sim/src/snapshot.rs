//! Snapshot output types.

use std::fmt;

use serde::Serialize;

use ct_core::LatLng;

/// Whether the courier has reached the destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InProgress,
    Completed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::InProgress => "in_progress",
            Status::Completed  => "completed",
        }
    }

    #[inline]
    pub fn is_completed(self) -> bool {
        matches!(self, Status::Completed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A courier's simulated position at one instant.
///
/// Serialises with the field names the tracking client reads
/// (`lat`, `lng`, `progress`, `currentStep`, `totalSteps`, `address`,
/// `timeLeft`, `status`).
///
/// `current_step_number` and `total_steps` count geometry *points*, not
/// turn-by-turn steps: `current_step_number` is the 1-based index of the
/// last point passed and `total_steps` is the number of points.  Clients
/// render them as "point x of y".
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSnapshot {
    #[serde(flatten)]
    pub position: LatLng,
    /// Whole percent, `0..=100`.
    #[serde(rename = "progress")]
    pub progress_percent: u8,
    #[serde(rename = "currentStep")]
    pub current_step_number: usize,
    pub total_steps: usize,
    /// Street name of the active step, if it has one.
    pub address: Option<String>,
    #[serde(rename = "timeLeft")]
    pub remaining_time: String,
    pub status: Status,
}

/// Human-readable remaining time.
///
/// Under a minute renders whole seconds (`"45 seconds"`), anything else
/// whole minutes rounded to nearest (`"2 minutes"` for 125 s).  Negative
/// input is treated as zero.
pub fn format_remaining(remaining_ms: i64) -> String {
    let secs = remaining_ms.max(0) as f64 / 1000.0;
    if secs < 60.0 {
        format!("{} seconds", secs.round() as i64)
    } else {
        format!("{} minutes", (secs / 60.0).round() as i64)
    }
}
