//! Tracker configuration.
//!
//! Typically built once by the hosting application (from the environment or
//! its own config file) and handed to the tracking service.

use crate::{CoreError, CoreResult};

/// Name of the environment variable read by [`TrackerConfig::from_env`].
pub const SPEED_ENV_VAR: &str = "SIMULATION_SPEED";

/// Top-level tracker configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerConfig {
    /// How many times faster than real time couriers travel.  A 20-minute
    /// drive at the default of 20 is simulated in one minute.
    pub speed_multiplier: f64,
}

impl TrackerConfig {
    pub const DEFAULT_SPEED_MULTIPLIER: f64 = 20.0;

    pub fn new(speed_multiplier: f64) -> CoreResult<Self> {
        if !(speed_multiplier.is_finite() && speed_multiplier > 0.0) {
            return Err(CoreError::Config(format!(
                "speed multiplier must be a positive number, got {speed_multiplier}"
            )));
        }
        Ok(Self { speed_multiplier })
    }

    /// Read `SIMULATION_SPEED` from the process environment.  Unset means the
    /// default; anything unparsable or non-positive is an error.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`from_env`](Self::from_env) against an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(SPEED_ENV_VAR) {
            None => Ok(Self::default()),
            Some(raw) => {
                let speed = raw.trim().parse::<f64>().map_err(|e| {
                    CoreError::Config(format!("{SPEED_ENV_VAR}={raw:?}: {e}"))
                })?;
                Self::new(speed)
            }
        }
    }

    /// Scale a real-world travel time into simulated milliseconds.
    ///
    /// The result may be zero for a zero-length route; the simulator rejects
    /// that, not this function.
    pub fn simulated_duration_ms(&self, real_secs: f64) -> i64 {
        (real_secs * 1000.0 / self.speed_multiplier).round() as i64
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { speed_multiplier: Self::DEFAULT_SPEED_MULTIPLIER }
    }
}
