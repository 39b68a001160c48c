//! Identifier type for expense records
//!
//! Expense ids are opaque strings assigned by whichever store owns the
//! records. The remote API hands out integer primary keys, so numeric ids
//! are accepted on input and kept in their decimal string form.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque, stable identifier of an [`ExpenseRecord`](super::ExpenseRecord)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generate a fresh random id (used by the local store on create)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form used in tables: the first 8 characters
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ExpenseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for ExpenseId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl FromStr for ExpenseId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ExpenseId::generate();
        let b = ExpenseId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_short_form() {
        let id = ExpenseId::from("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(id.short(), "550e8400");
        assert_eq!(ExpenseId::from(7u64).short(), "7");
    }

    #[test]
    fn test_numeric_ids_deserialize_as_strings() {
        let id: ExpenseId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ExpenseId::from("42"));

        let id: ExpenseId = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(id.as_str(), "abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);
    }
}
