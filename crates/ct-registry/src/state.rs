//! Per-courier arrival state.

/// Where a courier is in its delivery lifecycle.
///
/// The only transition is `Active -> Arrived`; there is no way back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CourierState {
    /// En route; snapshots come from the simulator.
    #[default]
    Active,
    /// Delivered; snapshots are pinned to the destination.
    Arrived,
}

impl CourierState {
    /// Move to `Arrived`.  Returns `true` if this call made the transition,
    /// `false` if the courier had already arrived.
    #[inline]
    pub fn arrive(&mut self) -> bool {
        let changed = *self == CourierState::Active;
        *self = CourierState::Arrived;
        changed
    }

    #[inline]
    pub fn is_arrived(self) -> bool {
        self == CourierState::Arrived
    }
}
