//! Budget utilization

use serde::Serialize;
use std::fmt;

use crate::models::Money;

/// Share of the monthly budget already spent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum Utilization {
    /// Percent of the budget spent; may exceed 100
    Percent(f64),
    /// No budget set, or a budget of zero
    Unavailable,
}

impl Utilization {
    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::Percent(p) => Some(*p),
            Self::Unavailable => None,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        matches!(self, Self::Percent(p) if *p > 100.0)
    }
}

impl fmt::Display for Utilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{:.1}% used", p),
            Self::Unavailable => write!(f, "Budget unavailable"),
        }
    }
}

/// `current_month_total / monthly_budget × 100`
pub fn budget_utilization(current_month_total: Money, monthly_budget: Option<Money>) -> Utilization {
    match monthly_budget {
        Some(budget) if budget.is_positive() => {
            Utilization::Percent(current_month_total.cents() as f64 / budget.cents() as f64 * 100.0)
        }
        _ => Utilization::Unavailable,
    }
}
