use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("simulated duration must be positive, got {0} ms")]
    InvalidDuration(i64),

    /// Internal invariant violation: routes are validated to have at least
    /// two points before they reach the simulator.
    #[error("route geometry has {points} point(s), at least 2 are required")]
    EmptyRoute { points: usize },
}

pub type SimResult<T> = Result<T, SimError>;
