//! Courier identifiers.
//!
//! Couriers are keyed by random (v4) UUIDs rather than dense indices: ids are
//! handed to clients, so they must be unguessable and never reused.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::CoreError;

/// Opaque identifier minted for every submitted order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CourierId(pub Uuid);

impl CourierId {
    /// Mint a fresh random identifier.
    #[inline]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CourierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for CourierId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for CourierId {
    #[inline]
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}
