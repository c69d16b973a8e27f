use ct_core::CourierId;
use ct_route::RouteError;
use ct_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("courier {0} not found")]
    NotFound(CourierId),

    #[error("route error: {0}")]
    Route(#[from] RouteError),

    #[error("simulation error: {0}")]
    Simulation(#[from] SimError),
}

/// Coarse classification for an outer transport layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself was wrong (HTTP 400).
    BadInput,
    /// Unknown courier (HTTP 404).
    NotFound,
    /// Upstream outage or broken invariant (HTTP 500).
    Internal,
}

impl TrackerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::NotFound(_) => ErrorKind::NotFound,
            TrackerError::Route(e) if e.is_bad_input() => ErrorKind::BadInput,
            TrackerError::Route(_) => ErrorKind::Internal,
            // A route too short to schedule is the caller's problem; a
            // geometry reaching the simulator unvalidated is ours.
            TrackerError::Simulation(SimError::InvalidDuration(_)) => ErrorKind::BadInput,
            TrackerError::Simulation(SimError::EmptyRoute { .. }) => ErrorKind::Internal,
        }
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
