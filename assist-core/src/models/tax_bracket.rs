use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One contiguous income range taxed at a single marginal rate.
///
/// `max_income` is `None` for the top bracket, which extends upward without
/// limit. A valid schedule has exactly one such bracket, in last position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}
