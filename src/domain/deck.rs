use core::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::{Hand, HAND_SIZE};
use crate::engine::{DeckError, RandomSource};

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Колода карт одного раунда.
///
/// Инвариант: `cards ∪ dealt` всегда равно стандартным 52 картам,
/// без повторов и пропусков. Карты раздаются с конца `cards` и
/// обратно в колоду не возвращаются.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: Vec<Card>,
}

impl Deck {
    /// Новая колода: 52 карты, сразу перемешанные через `rng`.
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::unshuffled();
        rng.shuffle(&mut deck.cards);
        debug!(cards = deck.count(), "колода создана и перемешана");
        deck
    }

    /// Стандартная 52-карточная колода в порядке:
    /// Diamonds 2..A, Hearts 2..A, Spades 2..A, Clubs 2..A.
    pub fn unshuffled() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Deck {
            cards,
            dealt: Vec::with_capacity(DECK_SIZE),
        }
    }

    /// Сколько карт осталось.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Оставшиеся карты (конец среза = верх колоды).
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Уже розданные карты, в порядке раздачи.
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// Перемешать колоду. Разрешено только пока в ней все 52 карты.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        if self.cards.len() != DECK_SIZE {
            warn!(remaining = self.cards.len(), "отказ: перемешивание неполной колоды");
            return Err(DeckError::InvalidState {
                remaining: self.cards.len(),
            });
        }
        rng.shuffle(&mut self.cards);
        debug!("колода перемешана");
        Ok(())
    }

    /// Взять `n` карт сверху колоды.
    ///
    /// При нехватке карт колода не меняется.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if n > remaining {
            warn!(requested = n, remaining, "отказ: в колоде не хватает карт");
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining,
            });
        }

        let taken = self.cards.split_off(remaining - n);
        self.dealt.extend_from_slice(&taken);
        debug!(dealt = n, remaining = self.cards.len(), "карты розданы");
        Ok(taken)
    }

    /// Раздать полную руку из 5 карт.
    pub fn deal_hand(&mut self) -> Result<Hand, DeckError> {
        self.deal(HAND_SIZE).map(Hand::new)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck of {} cards.", self.count())
    }
}
