//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use draw_poker_engine::domain::*;
use draw_poker_engine::engine::{DeckError, RandomSource};
use draw_poker_engine::infra::DeterministicRng;

/// Полный набор из 52 карт.
fn full_set() -> HashSet<Card> {
    Deck::unshuffled().cards().iter().copied().collect()
}

/// Card/Suit/Rank: Display + FromStr roundtrip.
#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),    // Ah
        Card::new(Rank::Ten, Suit::Spades),    // Ts
        Card::new(Rank::Two, Suit::Clubs),     // 2c
        Card::new(Rank::Nine, Suit::Diamonds), // 9d
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    // "10h" тоже понимаем
    assert_eq!("10h".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));

    // Неверные строки
    assert!("".parse::<Card>().is_err());
    assert!("XYZ".parse::<Card>().is_err());
    assert!("1c".parse::<Card>().is_err());
    assert!("Acx".parse::<Card>().is_err());
    assert_eq!("Ax".parse::<Card>(), Err(CardParseError::InvalidSuit('x')));
}

#[test]
fn numeric_rank_and_long_name() {
    assert_eq!(Card::new(Rank::Jack, Suit::Clubs).numeric_rank(), 11);
    assert_eq!(Card::new(Rank::Queen, Suit::Clubs).numeric_rank(), 12);
    assert_eq!(Card::new(Rank::King, Suit::Clubs).numeric_rank(), 13);
    assert_eq!(Card::new(Rank::Ace, Suit::Clubs).numeric_rank(), 14);
    assert_eq!(Card::new(Rank::Seven, Suit::Clubs).numeric_rank(), 7);

    assert_eq!(Card::new(Rank::Ace, Suit::Spades).long_name(), "A of Spades");
    assert_eq!(Card::new(Rank::Ten, Suit::Hearts).long_name(), "10 of Hearts");

    for rank in Rank::ALL {
        assert_eq!(Rank::from_value(rank.value()), Some(rank));
    }
    assert_eq!(Rank::from_value(1), None);
}

/// Свежая колода: 52 уникальные карты, по 13 в каждой масти.
#[test]
fn fresh_deck_is_complete() {
    let mut rng = DeterministicRng::from_seed(7);
    let deck = Deck::new(&mut rng);

    assert_eq!(deck.count(), 52);
    assert!(deck.dealt().is_empty());

    let set: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(set, full_set());

    for suit in Suit::ALL {
        assert_eq!(deck.cards().iter().filter(|c| c.suit == suit).count(), 13);
    }
}

#[test]
fn deal_keeps_dealt_and_remaining_disjoint() {
    let mut rng = DeterministicRng::from_seed(42);
    let mut deck = Deck::new(&mut rng);

    for n in [5, 5, 3, 0, 2, 10] {
        let taken = deck.deal(n).unwrap();
        assert_eq!(taken.len(), n);

        let remaining: HashSet<Card> = deck.cards().iter().copied().collect();
        let dealt: HashSet<Card> = deck.dealt().iter().copied().collect();

        assert_eq!(dealt.len(), deck.dealt().len(), "карта роздана дважды");
        assert!(remaining.is_disjoint(&dealt));
        let union: HashSet<Card> = remaining.union(&dealt).copied().collect();
        assert_eq!(union, full_set());
    }

    assert_eq!(deck.count(), 52 - 25);
}

#[test]
fn deal_whole_deck_then_fail() {
    let mut deck = Deck::unshuffled();
    assert_eq!(deck.deal(52).unwrap().len(), 52);
    assert!(deck.is_empty());
    assert_eq!(
        deck.deal(1),
        Err(DeckError::InsufficientCards {
            requested: 1,
            remaining: 0
        })
    );
}

#[test]
fn failed_deal_leaves_count_unchanged() {
    let mut deck = Deck::unshuffled();
    deck.deal(48).unwrap();
    assert_eq!(deck.count(), 4);

    let err = deck.deal(5).unwrap_err();
    assert_eq!(
        err,
        DeckError::InsufficientCards {
            requested: 5,
            remaining: 4
        }
    );
    assert_eq!(deck.count(), 4);
    assert_eq!(deck.dealt().len(), 48);
}

#[test]
fn shuffle_after_deal_is_invalid_state() {
    let mut rng = DeterministicRng::from_seed(1);
    let mut deck = Deck::new(&mut rng);
    assert_eq!(deck.count(), 52);

    // Полную колоду можно перемешать ещё раз.
    deck.shuffle(&mut rng).unwrap();

    deck.deal(5).unwrap();
    let before = deck.clone();
    assert_eq!(
        deck.shuffle(&mut rng),
        Err(DeckError::InvalidState { remaining: 47 })
    );
    assert_eq!(deck, before);
}

#[test]
fn deal_hand_gives_five_cards() {
    let mut rng = DeterministicRng::from_seed(3);
    let mut deck = Deck::new(&mut rng);

    let hand = deck.deal_hand().unwrap();
    assert_eq!(hand.len(), HAND_SIZE);
    assert_eq!(deck.count(), 47);
    assert_eq!(deck.to_string(), "Deck of 47 cards.");
}

#[test]
fn hand_display_uses_long_names() {
    let hand = Hand::new(vec![
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ten, Suit::Hearts),
    ]);
    assert_eq!(hand.to_string(), "A of Spades, 10 of Hearts");
}

/// Колода перемешивается именно через переданный RandomSource.
#[test]
fn construct_uses_injected_rng() {
    struct Reverse;
    impl RandomSource for Reverse {
        fn shuffle<T>(&mut self, slice: &mut [T]) {
            slice.reverse();
        }
    }

    let deck = Deck::new(&mut Reverse);
    let mut expected = Deck::unshuffled().cards().to_vec();
    expected.reverse();
    assert_eq!(deck.cards(), expected.as_slice());
}
