//! Display sinks: observational render events.
//!
//! The match emits a `RenderEvent` wherever the game has something to
//! show. Sinks only observe; the sequence of match states is the same
//! whichever sink is attached, including `NullSink`.

use std::io::Write;

use tracing::warn;

use crate::cards::Lane;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::PlayerView;
use crate::rules::{MatchOutcome, RoundResult};

/// Something worth showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    /// The match begins.
    MatchStarted { players: PlayerMap<PlayerView> },
    /// The acting player's board, before they are asked for an intent.
    BoardState { round: u32, view: PlayerView },
    /// The acting player's hand, before they are asked for an intent.
    HandListing { view: PlayerView },
    /// A round was scored.
    RoundEnded(RoundResult),
    /// The match is over.
    MatchWon(MatchOutcome),
}

/// Receives render events.
pub trait DisplaySink {
    fn render(&mut self, event: &RenderEvent);
}

impl<F> DisplaySink for F
where
    F: FnMut(&RenderEvent),
{
    fn render(&mut self, event: &RenderEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn render(&mut self, _event: &RenderEvent) {}
}

/// Keeps every event, for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<RenderEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Round results in the order they were announced.
    pub fn round_results(&self) -> impl Iterator<Item = &RoundResult> {
        self.events.iter().filter_map(|e| match e {
            RenderEvent::RoundEnded(result) => Some(result),
            _ => None,
        })
    }

    /// The winner announcement, if the match ended.
    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.events.iter().find_map(|e| match e {
            RenderEvent::MatchWon(outcome) => Some(outcome),
            _ => None,
        })
    }
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, event: &RenderEvent) {
        self.events.push(event.clone());
    }
}

/// Plain-text rendering to any writer.
#[derive(Debug)]
pub struct TextSink<W> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &RenderEvent) -> std::io::Result<()> {
        match event {
            RenderEvent::MatchStarted { players } => {
                let [first, second] = [&players[PlayerId::FIRST], &players[PlayerId::SECOND]];
                writeln!(
                    self.out,
                    "Game starting between {} with {} and {} with {}",
                    first.name, first.faction, second.name, second.faction
                )
            }
            RenderEvent::BoardState { round, view } => {
                writeln!(
                    self.out,
                    "Round {round}. Current player: {} with {} HP({})\n\nCurrent board:\n",
                    view.name, view.faction, view.life
                )?;
                for lane in Lane::ALL {
                    writeln!(
                        self.out,
                        "{lane} Row: Strength {}",
                        view.board.lane_strength(lane)
                    )?;
                    for card in view.board.lane(lane) {
                        writeln!(self.out, "{card}")?;
                    }
                }
                Ok(())
            }
            RenderEvent::HandListing { view } => {
                writeln!(self.out, "\nCurrent hand:\nFaction: {}", view.faction)?;
                for card in &view.hand {
                    writeln!(self.out, "{card}")?;
                }
                writeln!(
                    self.out,
                    "Please choose a card to play based on their name.\n\
                     Type N to end your turn, type S to skip your turns."
                )
            }
            RenderEvent::RoundEnded(result) => writeln!(
                self.out,
                "\n\nRound {} Ended ({} - {})\nPlayer who won the round: {}\n\n",
                result.round,
                result.strengths[PlayerId::FIRST],
                result.strengths[PlayerId::SECOND],
                result.winner_name
            ),
            RenderEvent::MatchWon(outcome) => writeln!(
                self.out,
                "Player who won the game: {}",
                outcome.winner_name
            ),
        }
    }
}

impl<W: Write> DisplaySink for TextSink<W> {
    fn render(&mut self, event: &RenderEvent) {
        if let Err(err) = self.write_event(event).and_then(|()| self.out.flush()) {
            warn!(%err, "failed to render event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Intent;
    use crate::core::config::MatchConfig;
    use crate::interface::ScriptedSource;
    use crate::rules::Match;

    fn play_starter(sink: &mut impl DisplaySink) {
        let mut game = Match::new(&MatchConfig::starter());
        let mut source = ScriptedSource::new()
            .with_intents(PlayerId::FIRST, [Intent::play("Vesemir"), Intent::Skip, Intent::Skip])
            .with_intents(PlayerId::SECOND, [Intent::Skip, Intent::Skip]);
        game.run(&mut source, sink).unwrap();
    }

    #[test]
    fn test_recording_sink_collects_results() {
        let mut sink = RecordingSink::new();
        play_starter(&mut sink);

        assert!(matches!(sink.events[0], RenderEvent::MatchStarted { .. }));
        assert_eq!(sink.round_results().count(), 2);
        assert_eq!(sink.outcome().unwrap().winner, PlayerId::FIRST);
    }

    #[test]
    fn test_text_sink_output() {
        let mut sink = TextSink::new(Vec::new());
        play_starter(&mut sink);
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.starts_with(
            "Game starting between Geralt of Rivia with Novigrad and Djikstra with Northern Realms\n"
        ));
        assert!(text.contains("Round 1. Current player: Djikstra with Northern Realms HP(2)"));
        assert!(text.contains("Melee Row: Strength 6"));
        assert!(text.contains("Round 1 Ended (6 - 0)\nPlayer who won the round: Geralt of Rivia"));
        assert!(text.contains("Round 2 Ended (0 - 0)"));
        assert!(text.ends_with("Player who won the game: Geralt of Rivia\n"));
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        play_starter(&mut |_: &RenderEvent| count += 1);
        assert!(count > 0);
    }
}
