use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::{Hand, HAND_SIZE};
use crate::engine::EvalError;

use super::hand_rank::HandCategory;
use super::lookup_tables::rank_counts;

/// Исход сравнения двух рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Outcome {
    First,
    Second,
    Tie,
}

impl Outcome {
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::First,
            Ordering::Less => Outcome::Second,
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// Вердикт для вывода игрокам.
    pub fn announce(self) -> &'static str {
        match self {
            Outcome::First => "Player 1 Wins",
            Outcome::Second => "Player 2 Wins",
            Outcome::Tie => "It's a tie",
        }
    }
}

/// Тай-брейк двух рук одной категории.
///
/// Категории должны совпадать: более сильная категория выигрывает без
/// тай-брейка (см. `decide_winner`).
pub fn compare(
    category_a: HandCategory,
    hand_a: &Hand,
    category_b: HandCategory,
    hand_b: &Hand,
) -> Result<Outcome, EvalError> {
    if category_a != category_b {
        return Err(EvalError::CategoryMismatch {
            first: category_a,
            second: category_b,
        });
    }

    let key_a = tie_key(category_a, hand_a.cards())?;
    let key_b = tie_key(category_b, hand_b.cards())?;

    Ok(Outcome::from_ordering(key_a.cmp(&key_b)))
}

/// Ключ сравнения внутри категории; ключи сравниваются лексикографически.
///
/// - без повторов рангов (HighCard, Straight, Flush, StraightFlush, RoyalFlush):
///   все 5 рангов по убыванию; у wheel туз считается единицей;
/// - с группами (Pair, TwoPair, ThreeOfAKind, FourOfAKind): ранги групп
///   (по размеру, затем по рангу), затем кикеры по убыванию;
/// - FullHouse: ранг тройки, затем ранг пары.
fn tie_key(category: HandCategory, cards: &[Card]) -> Result<Vec<u8>, EvalError> {
    if cards.len() != HAND_SIZE {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }

    let key = match category {
        HandCategory::HighCard | HandCategory::Flush | HandCategory::RoyalFlush => {
            descending_ranks(cards)
        }
        HandCategory::Straight | HandCategory::StraightFlush => straight_ranks(cards),
        HandCategory::FullHouse => {
            let (groups, _) = split_groups(cards);
            groups
        }
        HandCategory::Pair
        | HandCategory::TwoPair
        | HandCategory::ThreeOfAKind
        | HandCategory::FourOfAKind => {
            let (mut groups, kickers) = split_groups(cards);
            groups.extend(kickers);
            groups
        }
    };

    Ok(key)
}

fn descending_ranks(cards: &[Card]) -> Vec<u8> {
    let mut ranks: Vec<u8> = cards.iter().map(Card::numeric_rank).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}

/// Ранги стрита по убыванию; wheel A2345 превращается в [5,4,3,2,1],
/// чтобы он проигрывал стриту от шестёрки.
fn straight_ranks(cards: &[Card]) -> Vec<u8> {
    let mut ranks = descending_ranks(cards);
    if ranks == [14, 5, 4, 3, 2] {
        ranks = vec![5, 4, 3, 2, 1];
    }
    ranks
}

/// Разбить руку на группы одинаковых рангов и кикеры.
///
/// Группы упорядочены по размеру (большие раньше), затем по рангу;
/// каждая группа входит в ключ один раз. Кикеры по убыванию.
fn split_groups(cards: &[Card]) -> (Vec<u8>, Vec<u8>) {
    let counts = rank_counts(cards);

    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(2);
    let mut kickers: Vec<u8> = Vec::with_capacity(HAND_SIZE);

    for rank in (2u8..=14).rev() {
        match counts[rank as usize] {
            0 => {}
            1 => kickers.push(rank),
            n => groups.push((n, rank)),
        }
    }

    groups.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

    (groups.into_iter().map(|(_, rank)| rank).collect(), kickers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn split_groups_orders_by_size_then_rank() {
        // тройка двоек важнее пары тузов
        let (groups, kickers) = split_groups(&cards("2d 2h 2s Ac Ad"));
        assert_eq!(groups, vec![2, 14]);
        assert!(kickers.is_empty());

        let (groups, kickers) = split_groups(&cards("7d 7h 3s 3c Kd"));
        assert_eq!(groups, vec![7, 3]);
        assert_eq!(kickers, vec![13]);
    }

    #[test]
    fn wheel_key_plays_ace_low() {
        assert_eq!(straight_ranks(&cards("Ad 2h 3s 4c 5d")), vec![5, 4, 3, 2, 1]);
        assert_eq!(straight_ranks(&cards("Td Jh Qs Kc Ad")), vec![14, 13, 12, 11, 10]);
    }

    #[test]
    fn mismatched_categories_are_rejected() {
        let a = Hand::new(cards("7d 7h 3s 3c Kd"));
        let err = compare(HandCategory::TwoPair, &a, HandCategory::Pair, &a).unwrap_err();
        assert_eq!(
            err,
            EvalError::CategoryMismatch {
                first: HandCategory::TwoPair,
                second: HandCategory::Pair,
            }
        );
    }
}
