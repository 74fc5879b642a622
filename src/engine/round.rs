//! Автоматический раунд хедз-ап для dev-CLI и тестов.
//!
//! Живой игрок выбирает сброс сам; здесь его заменяет `DiscardStrategy`.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{ClassifiedHand, Hand, HAND_SIZE};
use crate::eval::lookup_tables::rank_counts;
use crate::eval::{classify, classify_hand, decide_winner, HandCategory, Outcome};
use crate::infra::config::DiscardStrategy;

use super::errors::{DeckError, EvalError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Итог раунда: обе руки после добора и вердикт.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RoundReport {
    pub first: ClassifiedHand,
    pub second: ClassifiedHand,
    pub outcome: Outcome,
}

/// Какие карты оставить в руке.
///
/// `KeepMadeHands`: стрит и старше держим целиком; иначе держим группы
/// одинаковых рангов, а без них одну старшую карту.
pub fn cards_to_keep(hand: &Hand, strategy: DiscardStrategy) -> Result<Vec<Card>, EvalError> {
    if strategy == DiscardStrategy::StandPat {
        return Ok(hand.cards().to_vec());
    }

    let category = classify(hand)?;
    if category >= HandCategory::Straight {
        return Ok(hand.cards().to_vec());
    }

    let counts = rank_counts(hand.cards());
    let grouped: Vec<Card> = hand
        .cards()
        .iter()
        .copied()
        .filter(|c| counts[c.numeric_rank() as usize] > 1)
        .collect();
    if !grouped.is_empty() {
        return Ok(grouped);
    }

    Ok(hand
        .cards()
        .iter()
        .copied()
        .max_by_key(Card::numeric_rank)
        .into_iter()
        .collect())
}

/// Сбросить лишнее и добрать до 5 карт из колоды.
pub fn draw(deck: &mut Deck, hand: Hand, strategy: DiscardStrategy) -> Result<Hand, RoundError> {
    let mut kept = cards_to_keep(&hand, strategy)?;
    let missing = HAND_SIZE.saturating_sub(kept.len());
    if missing > 0 {
        kept.extend(deck.deal(missing)?);
    }
    debug!(replaced = missing, "добор после сброса");
    Ok(Hand::new(kept))
}

/// Сыграть один раунд на уже созданной колоде.
///
/// Если карт не хватает, возвращается `DeckError::InsufficientCards`;
/// новую колоду заводит вызывающий.
pub fn play_heads_up(deck: &mut Deck, strategy: DiscardStrategy) -> Result<RoundReport, RoundError> {
    let first = deck.deal_hand()?;
    let second = deck.deal_hand()?;

    let first = classify_hand(draw(deck, first, strategy)?)?;
    let second = classify_hand(draw(deck, second, strategy)?)?;

    let outcome = decide_winner(&first, &second)?;
    Ok(RoundReport {
        first,
        second,
        outcome,
    })
}
