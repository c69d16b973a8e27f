//! Route-subsystem error type.

use thiserror::Error;

/// Errors produced while obtaining or validating a route.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid route data: {0}")]
    InvalidRouteData(String),

    #[error("missing from or to address")]
    MissingAddress,

    #[error("could not geocode address: {0}")]
    Geocode(String),

    #[error("directions service unavailable: {0}")]
    Unavailable(String),
}

impl RouteError {
    /// `true` for failures caused by the caller's input rather than by an
    /// upstream outage.
    pub fn is_bad_input(&self) -> bool {
        !matches!(self, RouteError::Unavailable(_))
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        RouteError::InvalidRouteData(reason.into())
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
