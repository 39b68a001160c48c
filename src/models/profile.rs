//! Budget profile model

use serde::{Deserialize, Serialize};

use super::money::{self, Money};
use crate::error::{SpendError, SpendResult};

/// The user's profile as served by `GET profile`
///
/// Holds only the current monthly budget; there is no budget history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetProfile {
    #[serde(default)]
    pub username: String,

    /// Monthly budget, `None` until one has been set
    #[serde(default, with = "money::as_optional_decimal")]
    pub budget: Option<Money>,
}

impl BudgetProfile {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            budget: None,
        }
    }

    /// Set the monthly budget (`PUT update-budget`)
    pub fn set_budget(&mut self, budget: Money) -> SpendResult<()> {
        if budget.is_negative() {
            return Err(SpendError::Validation(format!(
                "Budget cannot be negative: {}",
                budget
            )));
        }
        self.budget = Some(budget);
        Ok(())
    }
}
