//! Category selection for new and edited expenses
//!
//! Users pick one of a fixed set of suggested categories or type their own.
//! Either way the choice is resolved to a plain label before it is stored;
//! the analytics never look at where a label came from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SpendError, SpendResult};

/// Suggested categories offered when adding an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetCategory {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Health,
    Bills,
}

impl PresetCategory {
    /// All presets in display order
    pub const ALL: [PresetCategory; 6] = [
        PresetCategory::Food,
        PresetCategory::Transport,
        PresetCategory::Shopping,
        PresetCategory::Entertainment,
        PresetCategory::Health,
        PresetCategory::Bills,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Bills => "Bills",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚗",
            Self::Shopping => "🛒",
            Self::Entertainment => "🎟️",
            Self::Health => "⚕️",
            Self::Bills => "💡",
        }
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PresetCategory {
    type Err = SpendError;

    /// Case-insensitive match against the preset labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                SpendError::Validation(format!(
                    "Unknown category '{}'. Choose one of: {}",
                    s,
                    Self::ALL.map(|p| p.label()).join(", ")
                ))
            })
    }
}

/// A category as picked by the user: a preset or custom free text ("Other")
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    Preset(PresetCategory),
    Custom(String),
}

impl CategoryChoice {
    /// Resolve the choice to the label stored on the record
    ///
    /// Custom text is trimmed and must not be blank.
    pub fn resolve(&self) -> SpendResult<String> {
        match self {
            Self::Preset(preset) => Ok(preset.label().to_string()),
            Self::Custom(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Err(SpendError::Validation(
                        "Custom category cannot be empty".into(),
                    ))
                } else {
                    Ok(text.to_string())
                }
            }
        }
    }
}
