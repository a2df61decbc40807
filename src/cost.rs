//! Cost model: maps a rank and the source item's dummy flag to an integer
//! arc cost under a chosen priority scheme (spec.md §4.5).

use thiserror::Error;

use crate::options::PriorityScheme;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CostError {
    #[error("priority scheme `{0}` is not implemented")]
    UnsupportedScheme(String),
}

/// Source: BoardGameGeek TradeMaximizer wiki, priority scheme formulas
/// (spec.md §4.5, grounded in `original_source/src/mathtrader.cpp`
/// `_getCost`).
pub fn cost(scheme: &PriorityScheme, rank: i64, source_is_dummy: bool) -> Result<i64, CostError> {
    if source_is_dummy {
        return Ok(0);
    }
    match scheme {
        PriorityScheme::None => Ok(1),
        PriorityScheme::Linear => Ok(rank),
        PriorityScheme::Triangle => Ok(rank * (rank + 1) / 2),
        PriorityScheme::Square => Ok(rank * rank),
        PriorityScheme::Scaled => Err(CostError::UnsupportedScheme("SCALED-PRIORITIES".into())),
        PriorityScheme::Unrecognized(name) => Err(CostError::UnsupportedScheme(name.clone())),
    }
}
