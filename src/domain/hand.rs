use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::eval::HandCategory;

/// Количество карт в руке на момент оценки.
pub const HAND_SIZE: usize = 5;

/// Итоговая рука игрока.
///
/// Размер не проверяется при создании: рука собирается оркестратором
/// (раздача + добор после сброса), а ровно 5 карт требует уже оценщик.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    /// Карты через запятую в длинной форме: "A of Spades, 10 of Hearts, ...".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card.long_name())?;
        }
        Ok(())
    }
}

/// Результат классификации: категория + сама рука.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifiedHand {
    pub category: HandCategory,
    pub hand: Hand,
}

impl ClassifiedHand {
    pub fn new(category: HandCategory, hand: Hand) -> Self {
        Self { category, hand }
    }
}
