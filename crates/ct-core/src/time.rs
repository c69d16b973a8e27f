//! Wall-clock time model.
//!
//! # Design
//!
//! A courier simulation is anchored to the wall-clock instant its order was
//! created and is evaluated against whatever instant a query arrives at.
//! Both are plain millisecond counts since the Unix epoch:
//!
//!   elapsed_ms = now - start
//!
//! Integer milliseconds keep the elapsed-time arithmetic exact; only the
//! progress fraction derived from it is floating point.
//!
//! Reading "now" goes through the [`Clock`] trait so that the registry can be
//! driven by the real clock in production and by a [`ManualClock`] in tests
//! and replays.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

// ── EpochMs ───────────────────────────────────────────────────────────────────

/// Milliseconds since the Unix epoch.
///
/// Signed so that differences between two instants are always representable,
/// including a query instant that precedes the simulation start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EpochMs(pub i64);

impl EpochMs {
    pub const ZERO: EpochMs = EpochMs(0);

    /// Milliseconds elapsed from `earlier` to `self`.  Negative when `self`
    /// precedes `earlier`.
    #[inline]
    pub fn since(self, earlier: EpochMs) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<i64> for EpochMs {
    type Output = EpochMs;
    #[inline]
    fn add(self, rhs: i64) -> EpochMs {
        EpochMs(self.0.saturating_add(rhs))
    }
}

impl std::ops::Sub for EpochMs {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: EpochMs) -> i64 {
        self.since(rhs)
    }
}

impl fmt::Display for EpochMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of the current instant.
///
/// Implementations must be `Send + Sync`: a single clock is shared by every
/// request-handling task.
pub trait Clock: Send + Sync {
    fn now(&self) -> EpochMs;
}

/// The process wall clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> EpochMs {
        EpochMs(chrono::Utc::now().timestamp_millis())
    }
}

/// A clock that only moves when told to.
///
/// Interior mutability lets tests advance time through a shared reference
/// while a service holds the same clock.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicI64,
}

impl ManualClock {
    pub fn new(start: EpochMs) -> Self {
        Self { now_ms: AtomicI64::new(start.0) }
    }

    pub fn set(&self, to: EpochMs) {
        self.now_ms.store(to.0, Ordering::SeqCst);
    }

    /// Move the clock forward by `ms` and return the new instant.
    pub fn advance(&self, ms: i64) -> EpochMs {
        EpochMs(self.now_ms.fetch_add(ms, Ordering::SeqCst) + ms)
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> EpochMs {
        EpochMs(self.now_ms.load(Ordering::SeqCst))
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    #[inline]
    fn now(&self) -> EpochMs {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> EpochMs {
        (**self).now()
    }
}
