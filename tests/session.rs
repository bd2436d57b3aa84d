//! Interactive session tests, played from scripted input.

use std::collections::HashSet;

use onesuit::{
    Card, Deck, DiscardPile, Game, GameOptions, IoConsole, MemoryStore, Player, Rank, SaveError,
    Session, SessionError, Suit, standard_deck,
};

type ScriptedSession<'a> = Session<IoConsole<&'a [u8], Vec<u8>>, MemoryStore>;

/// A saved game where Player1 holds the hearts Two through Ten plus the King
/// of Clubs, and the Ace of Hearts is next in the deck.
fn one_card_from_winning() -> MemoryStore {
    let mut hand: Vec<Card> = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
    ]
    .into_iter()
    .map(|rank| Card::new(Suit::Hearts, rank))
    .collect();
    hand.push(Card::new(Suit::Clubs, Rank::King));
    let ace = Card::new(Suit::Hearts, Rank::Ace);

    let used: HashSet<Card> = hand.iter().copied().chain([ace]).collect();
    let rest: Vec<Card> = standard_deck()
        .into_iter()
        .filter(|card| !used.contains(card))
        .collect();
    // Alternate cards between the other hands so neither is a single suit.
    let players = vec![
        Player::with_hand("Player1", hand),
        Player::with_hand("Player2", rest[..20].iter().step_by(2).copied().collect()),
        Player::with_hand("Player3", rest[1..20].iter().step_by(2).copied().collect()),
    ];
    let deck = Deck::from_cards([ace].into_iter().chain(rest[20..].iter().copied()));
    let game = Game::from_parts(GameOptions::default(), 0, players, deck, DiscardPile::new());

    let mut store = MemoryStore::new();
    game.save(&mut store).unwrap();
    store
}

fn session(script: &str, store: MemoryStore, options: GameOptions) -> ScriptedSession<'_> {
    Session::new(IoConsole::new(script.as_bytes(), Vec::new()), store, options, 7)
}

fn finish(session: ScriptedSession<'_>) -> (String, MemoryStore) {
    let (console, store) = session.into_parts();
    let output = String::from_utf8(console.into_output()).unwrap();
    (output, store)
}

#[test]
fn resumed_game_is_won_by_discarding_the_odd_card() {
    let mut session = session(
        "y\n2\nKing of Clubs\n",
        one_card_from_winning(),
        GameOptions::default(),
    );

    let game = session.run().unwrap();
    assert_eq!(game.winner(), Some(0));
    assert_eq!(game.players()[0].len(), 10);
    assert!(game.players()[0].is_single_suit());

    let (output, store) = finish(session);
    assert!(output.starts_with("Load the saved game? (y/n) "));
    assert!(output.contains("Player1 : [2 of Hearts,"));
    assert!(output.contains("2 to draw from the deck, 3 to skip: "));
    assert!(output.contains("Player1 drew a card from the deck"));
    assert!(output.contains("Player1 discarded King of Clubs from their hand"));
    assert!(output.trim_end().ends_with("Player1 wins!"));
    assert_eq!(store.writes(), 2);
}

#[test]
fn invalid_discards_are_asked_again() {
    let mut session = session(
        "yes\n2\nJoker\n12\n0\nking of clubs\n",
        one_card_from_winning(),
        GameOptions::default(),
    );

    let game = session.run().unwrap();
    assert_eq!(game.winner(), Some(0));

    let (output, _) = finish(session);
    assert_eq!(output.matches("Invalid choice. Try again.").count(), 3);
    assert_eq!(output.matches("Hand: 1) 2 of Hearts").count(), 4);
}

#[test]
fn discard_by_hand_position() {
    // The King of Clubs is the tenth card once the Ace is drawn.
    let mut session = session("y\n2\n10\n", one_card_from_winning(), GameOptions::default());

    let game = session.run().unwrap();
    assert_eq!(game.winner(), Some(0));
    assert_eq!(
        game.discard_pile().peek_top(),
        Some(&Card::new(Suit::Clubs, Rank::King))
    );
}

#[test]
fn discard_attempts_can_be_capped() {
    let mut session = session(
        "y\n2\nnope\nstill nope\n",
        one_card_from_winning(),
        GameOptions::default().with_max_discard_attempts(Some(2)),
    );

    assert!(matches!(session.run(), Err(SessionError::TooManyAttempts)));
}

#[test]
fn skipped_turns_keep_hands_and_save_each_turn() {
    let mut session = session("y\n3\n3\n", one_card_from_winning(), GameOptions::default());

    assert!(matches!(session.run(), Err(SessionError::InputClosed)));

    let (output, mut store) = finish(session);
    assert!(output.contains("Player1 skipped their turn"));
    assert!(output.contains("Player2 skipped their turn"));
    assert!(output.contains("Player3's turn:"));
    assert_eq!(store.writes(), 3);

    let restored = Game::restore(&mut store, GameOptions::default(), 0).unwrap();
    let original = Game::restore(&mut one_card_from_winning(), GameOptions::default(), 0).unwrap();
    assert_eq!(restored.players(), original.players());
    assert_eq!(restored.deck(), original.deck());
}

#[test]
fn unknown_pickup_choices_are_asked_again() {
    // The discard pile is empty, so "1" is not on the menu.
    let mut session = session(
        "y\n1\n9\n2\nKing of Clubs\n",
        one_card_from_winning(),
        GameOptions::default(),
    );

    session.run().unwrap();

    let (output, _) = finish(session);
    assert_eq!(output.matches("Invalid choice. Try again.").count(), 2);
    assert!(!output.contains("1 to take"));
}

#[test]
fn new_game_is_dealt_and_saved() {
    let mut session = session("maybe\nn\n", MemoryStore::new(), GameOptions::default());

    assert!(matches!(session.run(), Err(SessionError::InputClosed)));

    let (output, mut store) = finish(session);
    assert!(output.contains("Please answer y or n."));
    assert!(output.contains("The deck contains 22 cards"));
    assert_eq!(store.writes(), 1);

    let saved = Game::restore(&mut store, GameOptions::default(), 0).unwrap();
    assert_eq!(saved.players().len(), 3);
    assert!(saved.players().iter().all(|player| player.len() == 10));
    assert_eq!(saved.deck().len(), 22);
}

#[test]
fn loading_without_a_save_fails() {
    let mut session = session("y\n", MemoryStore::new(), GameOptions::default());

    assert!(matches!(
        session.run(),
        Err(SessionError::Save(SaveError::Io(_)))
    ));
}
