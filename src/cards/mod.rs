//! Card system: definitions, instances, and deck lists.
//!
//! ## Key Types
//!
//! - `Card`: Static card data (name, strength, lane)
//! - `Lane`: Melee, Ranged or Siege
//! - `Faction`: The faction a deck belongs to
//! - `CardInstance`: A dealt card with a stable `EntityId`
//! - `DeckList`: A faction's card list, dealt once per match

pub mod decks;
pub mod definition;
pub mod instance;

pub use decks::{northern_realms_starter, novigrad_starter, DeckList};
pub use definition::{Card, Faction, Lane};
pub use instance::CardInstance;
