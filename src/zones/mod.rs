//! Card zones owned by a player.
//!
//! - `Hand`: cards not yet played this match
//! - `Board`: cards committed this round, grouped by lane
//!
//! A card is in at most one zone at a time. Cards cleared from a board at
//! round end go to the owning player's discard pile.

pub mod board;
pub mod hand;

pub use board::Board;
pub use hand::Hand;
