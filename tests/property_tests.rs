//! Property tests for board aggregation, card conservation, reset and life.

use proptest::prelude::*;

use rust_gwent::cards::{Card, CardInstance, Faction, Lane};
use rust_gwent::core::{EntityId, MatchConfig, PlayerId, PlayerMap};
use rust_gwent::interface::{NullSink, RandomSource};
use rust_gwent::rules::{round_winner, Match, Player};
use rust_gwent::zones::{Board, Hand};

fn lane_card() -> impl Strategy<Value = (u32, usize)> {
    (0u32..1000, 0usize..3)
}

fn board_from(cards: &[(u32, usize)]) -> Board {
    let mut board = Board::new();
    for (i, &(strength, lane)) in cards.iter().enumerate() {
        let card = Card::new(format!("card {i}"), strength, Lane::ALL[lane]);
        board.add_card(CardInstance::new(EntityId::new(i as u32), PlayerId::FIRST, card));
    }
    board
}

proptest! {
    #[test]
    fn test_strength_aggregation(cards in prop::collection::vec(lane_card(), 0..40)) {
        let board = board_from(&cards);

        for lane in Lane::ALL {
            let expected: u64 = cards
                .iter()
                .filter(|(_, l)| *l == lane.index())
                .map(|(s, _)| u64::from(*s))
                .sum();
            prop_assert_eq!(board.lane_strength(lane), expected);
        }

        let lanes: u64 = Lane::ALL.iter().map(|&l| board.lane_strength(l)).sum();
        let all: u64 = cards.iter().map(|(s, _)| u64::from(*s)).sum();
        prop_assert_eq!(board.total_strength(), lanes);
        prop_assert_eq!(board.total_strength(), all);
        prop_assert_eq!(board.len(), cards.len());
    }

    #[test]
    fn test_reset_idempotence(cards in prop::collection::vec(lane_card(), 0..20)) {
        let mut board = board_from(&cards);

        let cleared = board.reset();
        prop_assert_eq!(cleared.len(), cards.len());
        let once = board.clone();

        prop_assert!(board.reset().is_empty());
        prop_assert_eq!(&board, &once);
        prop_assert!(board.is_empty());
        prop_assert_eq!(board.total_strength(), 0);
    }

    #[test]
    fn test_life_monotonicity(life in 0u32..5, outcomes in prop::collection::vec(any::<bool>(), 0..10)) {
        let hand = Hand::new(PlayerId::FIRST, Faction::Nilfgaard, Vec::new());
        let mut player = Player::new(PlayerId::FIRST, "Emhyr", life, hand);

        for won in outcomes {
            let before = player.life();
            player.end_round(won);
            if won {
                prop_assert_eq!(player.life(), before);
            } else {
                prop_assert_eq!(player.life(), before.saturating_sub(1));
            }
            prop_assert_eq!(player.is_alive(), player.life() > 0);
        }
    }

    #[test]
    fn test_tie_break_determinism(first in 0u64..10_000, second in 0u64..10_000) {
        let winner = round_winner(&PlayerMap::from_pair(first, second));
        if second > first {
            prop_assert_eq!(winner, PlayerId::SECOND);
        } else {
            prop_assert_eq!(winner, PlayerId::FIRST);
        }
    }

    #[test]
    fn test_conservation_over_random_matches(seed in any::<u64>()) {
        let mut game = Match::new(&MatchConfig::starter());
        let mut source = RandomSource::new(seed);

        while !game.is_over() {
            game.step(&mut source, &mut NullSink).unwrap();
            for (_, player) in game.players().iter() {
                let held = player.hand().len() + player.board().len() + player.discard().len();
                prop_assert_eq!(held, player.initial_hand_size());
            }
        }

        let outcome = game.outcome().unwrap();
        prop_assert!(outcome.lives.iter().any(|(_, &life)| life == 0));
    }
}
