use crate::domain::card::{Card, Rank};

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маски всех стритов (5 рангов подряд), от слабейшего к сильнейшему.
///
/// Индекс 0: wheel (A2345), туз играет младшей картой.
/// Индекс 9: broadway (TJQKA).
pub const STRAIGHT_MASKS: [RankMask; 10] = [
    mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]),
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]),
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]),
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]),
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
];

/// Маска wheel-стрита A2345.
pub const WHEEL_MASK: RankMask = STRAIGHT_MASKS[0];

/// Маска рангов роял-флеша: A, K, Q, J, 10.
pub const ROYAL_MASK: RankMask = STRAIGHT_MASKS[9];

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    let idx = rank.value().saturating_sub(2); // Rank::Two = 2
    1u16 << idx
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let r = ranks[i] as u8;
        let idx = r.saturating_sub(2);
        mask |= 1 << idx;
        i += 1;
    }
    mask
}

/// Маска рангов набора карт (повторы рангов схлопываются).
pub fn mask_of(cards: &[Card]) -> RankMask {
    cards.iter().fold(0, |mask, c| mask | rank_to_bit(c.rank))
}

/// Сколько раз встречается каждый ранг. Индексы 2..=14, 0 и 1 не используются.
pub fn rank_counts(cards: &[Card]) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.numeric_rank() as usize] += 1;
    }
    counts
}

/// Пять карт образуют стрит ровно тогда, когда их маска совпадает с одной
/// из масок стрита (маска из 5 бит = 5 разных рангов).
///
/// Возвращает старшую карту стрита; для wheel (A2345) это `Rank::Five`.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    let idx = STRAIGHT_MASKS.iter().position(|&sm| sm == rank_mask)?;
    if idx == 0 {
        return Some(Rank::Five);
    }
    Rank::from_value(idx as u8 + 5)
}
