//! The match's two collaborators.
//!
//! - `CommandSource`: supplies the acting player's next intent
//! - `DisplaySink`: observes render events

pub mod display;
pub mod source;

pub use display::{DisplaySink, NullSink, RecordingSink, RenderEvent, TextSink};
pub use source::{CommandSource, RandomSource, ScriptedSource};
