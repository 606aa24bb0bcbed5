//! Entity identification for dealt cards.
//!
//! Every card dealt into a hand receives a unique `EntityId`. Card names
//! are what players type, but the id is what the engine moves between
//! zones, so two cards sharing a name never collide.
//!
//! ## Usage
//!
//! ```
//! use rust_gwent::core::{EntityAllocator, EntityId};
//!
//! let mut ids = EntityAllocator::new();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_eq!(first, EntityId(0));
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a dealt card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic allocator for entity IDs.
///
/// One allocator is shared by both hands of a match, so ids are unique
/// across the whole session, not just within one hand.
#[derive(Clone, Debug, Default)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_basics() {
        let id = EntityId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "#7");
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = EntityAllocator::new();
        let allocated: Vec<_> = (0..5).map(|_| ids.alloc()).collect();

        assert_eq!(allocated, (0..5).map(EntityId).collect::<Vec<_>>());
        assert_eq!(ids.allocated(), 5);
    }

    #[test]
    fn test_entity_id_serialization() {
        let id = EntityId(12);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
