use tracing::debug;

use crate::domain::hand::ClassifiedHand;
use crate::engine::EvalError;

use super::tie_break::{compare, Outcome};

/// Кто сильнее из двух классифицированных рук.
///
/// Старшая категория выигрывает сразу; при равных категориях решает
/// тай-брейк по кикерам.
pub fn decide_winner(a: &ClassifiedHand, b: &ClassifiedHand) -> Result<Outcome, EvalError> {
    let outcome = if a.category != b.category {
        Outcome::from_ordering(a.category.cmp(&b.category))
    } else {
        compare(a.category, &a.hand, b.category, &b.hand)?
    };

    debug!(
        first = %a.category,
        second = %b.category,
        ?outcome,
        "шоудаун"
    );
    Ok(outcome)
}
