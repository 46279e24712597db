//! Strongly typed entity identifier.

use std::fmt;

/// Opaque handle for a simulation entity.
///
/// Ids are allocated monotonically by the world starting at 1 and are never
/// reused, even after the entity dies.  The value 0 is reserved as the
/// [`BROADCAST`](EntityId::BROADCAST) address on events.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Event address meaning "every listener".
    pub const BROADCAST: EntityId = EntityId(0);

    /// `true` if this id is the broadcast address rather than a real entity.
    #[inline]
    pub fn is_broadcast(self) -> bool {
        self == Self::BROADCAST
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}
