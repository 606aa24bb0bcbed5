//! Match config loading tests.

use rust_gwent::cards::{Faction, Lane};
use rust_gwent::core::{ConfigError, MatchConfig, PlayPolicy, PlayerId, DEFAULT_LIFE};
use rust_gwent::interface::{NullSink, ScriptedSource};
use rust_gwent::rules::Match;
use rust_gwent::Intent;

const CONFIG: &str = r#"{
    "players": [
        {
            "name": "Emhyr",
            "life": 1,
            "deck": {
                "faction": "Nilfgaard",
                "cards": [
                    { "name": "Cahir", "strength": 8, "lane": "Melee" },
                    { "name": "Fringilla", "strength": 4, "lane": "Ranged" }
                ]
            }
        },
        {
            "name": "Foltest",
            "deck": {
                "faction": "NorthernRealms",
                "cards": [
                    { "name": "Ballista", "strength": 6, "lane": "Siege" }
                ]
            }
        }
    ],
    "play_policy": "KeepsTurn"
}"#;

#[test]
fn test_load_json_config() {
    let config = MatchConfig::from_json_str(CONFIG).unwrap();

    let first = config.player(PlayerId::FIRST);
    assert_eq!(first.name, "Emhyr");
    assert_eq!(first.life, 1);
    assert_eq!(first.deck.faction, Faction::Nilfgaard);
    assert_eq!(first.deck.len(), 2);

    let second = config.player(PlayerId::SECOND);
    assert_eq!(second.life, DEFAULT_LIFE);
    assert_eq!(second.deck.cards[0].lane, Lane::Siege);

    assert_eq!(config.play_policy, PlayPolicy::KeepsTurn);
}

#[test]
fn test_play_policy_defaults_to_ends_turn() {
    let json = CONFIG.replace(",\n    \"play_policy\": \"KeepsTurn\"", "");
    assert!(!json.contains("play_policy"));
    let config = MatchConfig::from_json_str(&json).unwrap();
    assert_eq!(config.play_policy, PlayPolicy::EndsTurn);
}

#[test]
fn test_rejects_empty_name() {
    let json = CONFIG.replace("\"Emhyr\"", "\"  \"");
    let err = MatchConfig::from_json_str(&json).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_rejects_malformed_json() {
    let err = MatchConfig::from_json_str("{ \"players\": [] }").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_missing_file() {
    let err = MatchConfig::from_path("/nonexistent/gwent.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_loaded_config_plays() {
    let config = MatchConfig::from_json_str(CONFIG).unwrap();
    let mut game = Match::new(&config);
    let mut source = ScriptedSource::new()
        .with_intents(PlayerId::FIRST, [Intent::play("Cahir"), Intent::Skip])
        .with_intents(PlayerId::SECOND, [Intent::play("Ballista"), Intent::Skip])
        .with_intents(PlayerId::FIRST, [Intent::Skip])
        .with_intents(PlayerId::SECOND, [Intent::Skip]);

    let outcome = game.run(&mut source, &mut NullSink).unwrap();

    // Cahir beats the Ballista, then Emhyr takes the empty round on the tie.
    assert_eq!(game.round_results()[0].winner, PlayerId::FIRST);
    assert_eq!(outcome.rounds, 2);
    assert_eq!(outcome.winner, PlayerId::FIRST);
}
