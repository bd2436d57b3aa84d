//! Save and restore tests.

use std::env;
use std::fs;
use std::process;

use serde_json::{Value, json};

use onesuit::{
    Card, FileStore, Game, GameOptions, MemoryStore, PickupSource, SaveError, SaveStore,
    SavedGame, standard_deck,
};

fn played_game() -> Game {
    let mut game = Game::new(GameOptions::default(), 21);
    game.deal().unwrap();

    // Player1 draws and throws back the drawn card, Player2 takes it.
    let drawn = game.pick_up(PickupSource::Deck).unwrap().card.unwrap();
    game.discard(drawn).unwrap();
    game.end_turn().unwrap();
    game.pick_up(PickupSource::DiscardPile).unwrap();
    game.discard_at(0).unwrap();
    game.end_turn().unwrap();
    game
}

fn names(cards: &[Card]) -> Vec<String> {
    cards.iter().map(ToString::to_string).collect()
}

#[test]
fn round_trip_keeps_every_card_in_place() {
    let game = played_game();
    let mut store = MemoryStore::new();
    game.save(&mut store).unwrap();
    assert_eq!(store.writes(), 1);

    let restored = Game::restore(&mut store, GameOptions::default(), 0).unwrap();
    assert_eq!(restored.players(), game.players());
    assert_eq!(restored.deck(), game.deck());
    assert_eq!(restored.discard_pile(), game.discard_pile());
    assert_eq!(restored.current_player_index(), 0);
    assert_eq!(restored.options(), &GameOptions::default());
    assert_eq!(restored.deck().peek(), game.deck().iter().next());
}

#[test]
fn record_layout() {
    let game = played_game();
    let mut store = MemoryStore::new();
    game.save(&mut store).unwrap();

    let record: Value = serde_json::from_str(store.record().unwrap()).unwrap();
    assert_eq!(record["playersNumber"], 3);
    assert!(record.get("players_number").is_none());
    assert_eq!(record["players"][0]["name"], "Player1");
    assert_eq!(
        record["players"][1]["cards"],
        json!(names(game.players()[1].cards()))
    );
    assert_eq!(record["deck"], json!(names(&game.deck().iter().copied().collect::<Vec<_>>())));
    assert_eq!(
        record["discardPile"],
        json!(names(game.discard_pile().cards()))
    );
    assert!(record.get("discard_pile").is_none());
}

#[test]
fn snake_case_keys_from_older_saves_are_accepted() {
    let cards = names(&standard_deck());
    let record = json!({
        "players_number": 2,
        "players": [
            { "name": "Ann", "cards": &cards[..10] },
            { "name": "Bob", "cards": &cards[10..20] },
        ],
        "deck": &cards[20..50],
        "discard_pile": &cards[50..],
    });
    let mut store = MemoryStore::with_record(record.to_string());

    let game = Game::restore(&mut store, GameOptions::default(), 0).unwrap();
    assert_eq!(game.players()[1].name(), "Bob");
    assert_eq!(game.deck().len(), 30);
    assert_eq!(
        game.discard_pile().peek_top().map(ToString::to_string),
        Some("Ace of Clubs".to_owned())
    );
}

#[test]
fn rejects_bad_records() {
    let mut missing = MemoryStore::new();
    assert!(matches!(
        Game::restore(&mut missing, GameOptions::default(), 0),
        Err(SaveError::Io(_))
    ));

    let mut garbage = MemoryStore::with_record("{ not json");
    assert!(matches!(
        Game::restore(&mut garbage, GameOptions::default(), 0),
        Err(SaveError::Json(_))
    ));

    let mut unknown_card = MemoryStore::with_record(
        json!({
            "playersNumber": 1,
            "players": [{ "name": "Ann", "cards": ["Joker of Hearts"] }],
            "deck": [],
            "discardPile": [],
        })
        .to_string(),
    );
    assert!(matches!(
        Game::restore(&mut unknown_card, GameOptions::default(), 0),
        Err(SaveError::Json(_))
    ));

    let mut saved = SavedGame::from(&played_game());
    saved.players_number = 4;
    assert!(matches!(
        saved.validate(),
        Err(SaveError::PlayerCountMismatch {
            recorded: 4,
            listed: 3
        })
    ));

    let mut saved = SavedGame::from(&played_game());
    let duplicate = saved.deck[0];
    saved.discard_pile.push(duplicate);
    assert!(matches!(saved.validate(), Err(SaveError::CardSetMismatch)));

    let mut saved = SavedGame::from(&played_game());
    saved.deck.pop();
    assert!(matches!(saved.validate(), Err(SaveError::CardSetMismatch)));

    let mut saved = SavedGame::from(&played_game());
    saved.players.clear();
    saved.players_number = 0;
    assert!(matches!(saved.validate(), Err(SaveError::NoPlayers)));
}

#[test]
fn file_store_round_trip() {
    let path = env::temp_dir().join(format!("onesuit-save-{}.json", process::id()));
    let mut store = FileStore::new(&path);

    assert!(store.read().is_err());

    let game = played_game();
    game.save(&mut store).unwrap();
    let restored = Game::restore(&mut store, GameOptions::default(), 0).unwrap();
    assert_eq!(restored.players(), game.players());
    assert_eq!(restored.deck(), game.deck());

    fs::remove_file(&path).unwrap();
}
