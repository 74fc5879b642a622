//! Ядро пятикарточного дро-покера.
//!
//! - `domain`: карты, колода, руки;
//! - `eval`: классификация рук, тай-брейк, выбор победителя;
//! - `engine`: ошибки ядра, `RandomSource`, автоматический раунд;
//! - `infra`: реализации RNG и конфиг dev-CLI.
//!
//! Ввод/вывод и интерактив (выбор сброса, "сыграть ещё") живут снаружи.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Card, ClassifiedHand, Deck, Hand, Rank, Suit};
pub use engine::{DeckError, EvalError, RandomSource};
pub use eval::{classify, compare, decide_winner, HandCategory, Outcome};
