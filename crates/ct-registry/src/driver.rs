//! Synthetic driver assignment.
//!
//! Orders get a driver picked uniformly from a small fixed roster so the
//! tracking page has a name and a plate to show.

use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// A driver as shown to the customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfile {
    pub name: String,
    pub license_plate: String,
}

impl DriverProfile {
    pub fn new(name: impl Into<String>, license_plate: impl Into<String>) -> Self {
        Self { name: name.into(), license_plate: license_plate.into() }
    }
}

const DEFAULT_ROSTER: [(&str, &str); 3] = [
    ("John Doe",     "ABC123"),
    ("Jane Smith",   "XYZ789"),
    ("Mike Johnson", "DEF456"),
];

/// Roster plus the RNG used to pick from it.
///
/// The RNG sits behind a mutex so one pool can serve concurrent order
/// creation.
pub struct DriverPool {
    roster: Vec<DriverProfile>,
    rng:    Mutex<SmallRng>,
}

impl DriverPool {
    /// The built-in three-driver roster with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(default_roster(), SmallRng::from_entropy())
    }

    /// Deterministic picks for tests and replays.
    pub fn seeded(roster: Vec<DriverProfile>, seed: u64) -> Self {
        Self::with_rng(roster, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(roster: Vec<DriverProfile>, rng: SmallRng) -> Self {
        let roster = if roster.is_empty() { default_roster() } else { roster };
        Self { roster, rng: Mutex::new(rng) }
    }

    pub fn roster(&self) -> &[DriverProfile] {
        &self.roster
    }

    /// Pick a driver uniformly at random.
    pub fn pick(&self) -> DriverProfile {
        // Never empty (see `with_rng`), so the range is never empty either.
        let i = self.rng.lock().gen_range(0..self.roster.len());
        self.roster[i].clone()
    }
}

impl Default for DriverPool {
    fn default() -> Self {
        Self::new()
    }
}

fn default_roster() -> Vec<DriverProfile> {
    DEFAULT_ROSTER
        .iter()
        .map(|(name, plate)| DriverProfile::new(*name, *plate))
        .collect()
}
