//! Portfolio selected for purchase

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One investment in the selected portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// Short identifier, stable across sessions
    pub id: String,

    /// Offering name
    pub name: String,

    /// Amount allocated, in whole dollars
    pub amount: Money,
}

impl PortfolioItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
        }
    }
}

/// The portfolio every new session starts with
pub fn default_portfolio() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem::new("a", "MCG Madison Ridge DST", Money::from_dollars(270_000)),
        PortfolioItem::new("b", "CX Mode — Hyattsville", Money::from_dollars(270_000)),
        PortfolioItem::new("c", "NexPoint Semiconductor", Money::from_dollars(270_000)),
    ]
}

/// Sum of all allocations
pub fn portfolio_total(items: &[PortfolioItem]) -> Money {
    items.iter().map(|item| item.amount).sum()
}
