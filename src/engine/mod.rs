//! Движок раунда: ошибки ядра, интерфейс источника случайности и
//! автоматический раунд хедз-ап.
//!
//! Ядро не знает, откуда берётся перестановка колоды: её поставляет
//! реализация `RandomSource` (см. `infra::rng`).

pub mod errors;
pub mod round;

pub use errors::{DeckError, EvalError};
pub use round::{play_heads_up, RoundError, RoundReport};

/// RNG интерфейс для колоды.
/// Реализация должна давать равномерно случайную перестановку.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
