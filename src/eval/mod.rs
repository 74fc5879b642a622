//! Модуль оценки силы рук пятикарточного покера.
//!
//! Основные функции:
//!   `classify(hand) -> HandCategory`
//!   `compare(cat_a, hand_a, cat_b, hand_b) -> Outcome`
//!   `decide_winner(a, b) -> Outcome`

pub mod classifier;
pub mod hand_rank;
pub mod lookup_tables;
pub mod showdown;
pub mod tie_break;

pub use classifier::{classify, classify_cards, classify_hand};
pub use hand_rank::HandCategory;
pub use showdown::decide_winner;
pub use tie_break::{compare, Outcome};
