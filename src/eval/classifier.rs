use tracing::trace;

use crate::domain::card::Card;
use crate::domain::hand::{ClassifiedHand, Hand, HAND_SIZE};
use crate::engine::EvalError;

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, mask_of, rank_counts, ROYAL_MASK};

/// Определить категорию руки из ровно 5 карт.
///
/// Порядок карт не важен. Предикаты проверяются от сильнейшей категории
/// к слабейшей, побеждает первый сработавший.
pub fn classify(hand: &Hand) -> Result<HandCategory, EvalError> {
    let category = classify_cards(hand.cards())?;
    trace!(hand = %hand, %category, "рука классифицирована");
    Ok(category)
}

/// То же, что `classify`, но сразу собирает `ClassifiedHand`.
pub fn classify_hand(hand: Hand) -> Result<ClassifiedHand, EvalError> {
    let category = classify(&hand)?;
    Ok(ClassifiedHand::new(category, hand))
}

/// Классификация по срезу карт.
pub fn classify_cards(cards: &[Card]) -> Result<HandCategory, EvalError> {
    if cards.len() != HAND_SIZE {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }

    let shape = Shape::of(cards);

    let category = if shape.is_royal && shape.is_flush {
        HandCategory::RoyalFlush
    } else if shape.is_straight && shape.is_flush {
        HandCategory::StraightFlush
    } else if shape.pattern[0] == 4 {
        HandCategory::FourOfAKind
    } else if shape.pattern[..2] == [3, 2] {
        HandCategory::FullHouse
    } else if shape.is_flush {
        HandCategory::Flush
    } else if shape.is_straight {
        HandCategory::Straight
    } else if shape.pattern[0] == 3 {
        HandCategory::ThreeOfAKind
    } else if shape.pattern[..3] == [2, 2, 1] {
        HandCategory::TwoPair
    } else if shape.pattern[..2] == [2, 1] {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    };

    Ok(category)
}

/// Сводка по 5 картам, из которой читаются все предикаты.
struct Shape {
    is_flush: bool,
    is_straight: bool,
    is_royal: bool,
    /// Кратности рангов по убыванию, добитые нулями:
    /// [4,1,0,0,0], [3,2,0,0,0], [2,2,1,0,0], [1,1,1,1,1] и т.д.
    pattern: [u8; HAND_SIZE],
}

impl Shape {
    fn of(cards: &[Card]) -> Self {
        let first_suit = cards[0].suit;
        let is_flush = cards.iter().all(|c| c.suit == first_suit);

        let mask = mask_of(cards);
        let is_straight = detect_straight(mask).is_some();

        let mut pattern = [0u8; HAND_SIZE];
        let mut counts: Vec<u8> = rank_counts(cards).into_iter().filter(|&c| c > 0).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        for (slot, count) in pattern.iter_mut().zip(counts) {
            *slot = count;
        }

        Shape {
            is_flush,
            is_straight,
            is_royal: mask == ROYAL_MASK,
            pattern,
        }
    }
}
