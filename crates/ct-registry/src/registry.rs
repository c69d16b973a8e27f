//! The `CourierRegistry`: keyed store of active and arrived couriers.
//!
//! # Locking
//!
//! ```text
//! RwLock<map>                     held only to insert or look up an entry
//!   └─ Arc<CourierEntry>
//!        ├─ immutable: parameters, driver, addresses
//!        └─ Mutex<CourierState>   held for one snapshot computation
//! ```
//!
//! Lookups clone the `Arc` and release the map lock straight away, so a slow
//! snapshot never blocks order creation.  The per-entry mutex serialises
//! concurrent queries for the *same* courier only, which keeps the
//! `Active -> Arrived` flip and the snapshot that triggered it consistent.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use ct_core::{CourierId, EpochMs};
use ct_sim::{PositionSnapshot, SimResult, SimulationParameters, arrived_snapshot};

use crate::{CourierState, DriverProfile, TrackerError, TrackerResult};

#[cfg(feature = "fx-hash")]
type CourierMap = rustc_hash::FxHashMap<CourierId, Arc<CourierEntry>>;
#[cfg(not(feature = "fx-hash"))]
type CourierMap = std::collections::HashMap<CourierId, Arc<CourierEntry>>;

// ── NewCourier ────────────────────────────────────────────────────────────────

/// Everything needed to register a courier.
#[derive(Debug, Clone)]
pub struct NewCourier {
    pub params:        SimulationParameters,
    pub driver:        DriverProfile,
    pub start_address: String,
    pub end_address:   String,
}

// ── CourierEntry ──────────────────────────────────────────────────────────────

/// One registered courier.
///
/// Only `state` changes after registration, and only from `Active` to
/// `Arrived`.
#[derive(Debug)]
pub struct CourierEntry {
    id:            CourierId,
    params:        SimulationParameters,
    driver:        DriverProfile,
    start_address: String,
    end_address:   String,
    state:         Mutex<CourierState>,
}

impl CourierEntry {
    #[inline]
    pub fn id(&self) -> CourierId {
        self.id
    }

    #[inline]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    #[inline]
    pub fn driver(&self) -> &DriverProfile {
        &self.driver
    }

    #[inline]
    pub fn start_address(&self) -> &str {
        &self.start_address
    }

    #[inline]
    pub fn end_address(&self) -> &str {
        &self.end_address
    }

    pub fn state(&self) -> CourierState {
        *self.state.lock()
    }

    /// Flip to `Arrived`.  Returns `true` if this call made the transition.
    pub fn mark_arrived(&self) -> bool {
        let changed = self.state.lock().arrive();
        if changed {
            info!(courier = %self.id, destination = %self.end_address, "courier arrived");
        }
        changed
    }

    /// The courier's snapshot at `now`.
    ///
    /// Arrived couriers get the fixed arrival snapshot without consulting
    /// the simulator.  If the simulator reports completion, the entry flips
    /// to `Arrived` and the arrival snapshot is returned in place of the raw
    /// one, so every completed response for this courier is identical.
    pub fn snapshot_at(&self, now: EpochMs) -> SimResult<PositionSnapshot> {
        let mut state = self.state.lock();
        if state.is_arrived() {
            return Ok(self.arrived());
        }

        let snapshot = self.params.snapshot_at(now)?;
        if !snapshot.status.is_completed() {
            return Ok(snapshot);
        }

        state.arrive();
        drop(state);
        info!(courier = %self.id, destination = %self.end_address, "courier arrived");
        Ok(self.arrived())
    }

    fn arrived(&self) -> PositionSnapshot {
        arrived_snapshot(self.params.route(), &self.end_address)
    }
}

// ── CourierRegistry ───────────────────────────────────────────────────────────

/// Thread-safe map from [`CourierId`] to [`CourierEntry`].
///
/// Constructed explicitly and owned by whoever serves requests; there is no
/// process-wide instance.
#[derive(Default)]
pub struct CourierRegistry {
    entries: RwLock<CourierMap>,
}

impl CourierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new courier under a freshly minted id and return the id.
    pub fn create(&self, courier: NewCourier) -> CourierId {
        let mut entries = self.entries.write();
        let mut id = CourierId::new_v4();
        while entries.contains_key(&id) {
            id = CourierId::new_v4();
        }

        let NewCourier { params, driver, start_address, end_address } = courier;
        debug!(
            courier = %id,
            points = params.route().point_count(),
            duration_ms = params.total_duration_ms(),
            "courier registered"
        );
        entries.insert(id, Arc::new(CourierEntry {
            id,
            params,
            driver,
            start_address,
            end_address,
            state: Mutex::new(CourierState::Active),
        }));
        id
    }

    /// Look up a courier.
    pub fn get(&self, id: CourierId) -> Option<Arc<CourierEntry>> {
        self.entries.read().get(&id).cloned()
    }

    /// Like [`get`](Self::get) but with a [`TrackerError::NotFound`] error.
    pub fn require(&self, id: CourierId) -> TrackerResult<Arc<CourierEntry>> {
        self.get(id).ok_or_else(|| {
            debug!(courier = %id, "unknown courier");
            TrackerError::NotFound(id)
        })
    }

    /// Flip `id` to `Arrived`.  Idempotent: returns `Ok(false)` if it had
    /// already arrived.
    pub fn mark_completed(&self, id: CourierId) -> TrackerResult<bool> {
        Ok(self.require(id)?.mark_arrived())
    }

    /// Snapshot for `id` at `now`.  See [`CourierEntry::snapshot_at`].
    pub fn snapshot(&self, id: CourierId, now: EpochMs) -> TrackerResult<PositionSnapshot> {
        Ok(self.require(id)?.snapshot_at(now)?)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
