use thiserror::Error;

use crate::eval::HandCategory;

/// Ошибки колоды.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Перемешивать можно только полную колоду, иначе следующие раздачи будут смещены.
    #[error("перемешать можно только полную колоду (в колоде {remaining} из 52 карт)")]
    InvalidState { remaining: usize },

    #[error("недостаточно карт в колоде: запрошено {requested}, осталось {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// Ошибки оценки рук.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("рука должна состоять ровно из 5 карт, получено {0}")]
    InvalidHandSize(usize),

    #[error("тай-брейк возможен только для рук одной категории ({first:?} vs {second:?})")]
    CategoryMismatch {
        first: HandCategory,
        second: HandCategory,
    },
}
