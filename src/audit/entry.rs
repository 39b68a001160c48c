//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// What kind of record an entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Profile,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Profile => write!(f, "Profile"),
        }
    }
}

/// A single line of the audit log
///
/// `before` is set for updates and deletes, `after` for creates and
/// updates. An update whose target had already been removed carries no
/// `before` and says so in its summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    pub entity_id: String,

    /// Short label for the record, e.g. "Groceries (Food)"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable field changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Create, entity_type, entity_id.into(), entity_name)
        }
    }

    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
            ..Self::new(Operation::Update, entity_type, entity_id.into(), entity_name)
        }
    }

    /// An update that found nothing to apply to
    pub fn lost_update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        attempted: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(attempted).ok(),
            diff_summary: Some("not applied: record no longer exists".to_string()),
            ..Self::new(Operation::Update, entity_type, entity_id.into(), entity_name)
        }
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Delete, entity_type, entity_id.into(), entity_name)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(EntityType::Expense.to_string(), "Expense");
        assert_eq!(EntityType::Profile.to_string(), "Profile");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"id": "abc", "amount": 12.5, "category": "Food"});
        let entry = AuditEntry::create(EntityType::Expense, "abc", None, &data);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_id, "abc");
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(data));
    }

    #[test]
    fn test_update_and_delete_entries() {
        let before = json!({"budget": 1000});
        let after = json!({"budget": 1500});
        let entry = AuditEntry::update(
            EntityType::Profile,
            "profile",
            None,
            &before,
            &after,
            Some("budget: 1000 -> 1500".to_string()),
        );
        assert!(entry.before.is_some() && entry.after.is_some());

        let entry = AuditEntry::delete(EntityType::Expense, "abc", None, &before);
        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_lost_update_entry() {
        let attempted = json!({"id": "gone", "amount": 3});
        let entry = AuditEntry::lost_update(EntityType::Expense, "gone", None, &attempted);

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_none());
        assert!(entry
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("no longer exists"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create(EntityType::Expense, "abc", None, &json!({}));
        let line = serde_json::to_string(&entry).unwrap();

        assert!(line.contains(r#""operation":"create""#));
        assert!(line.contains(r#""entity_type":"expense""#));
        assert!(!line.contains("before"));

        let back: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(back.entity_type, EntityType::Expense);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            EntityType::Expense,
            "abc",
            Some("Lunch (Food)".to_string()),
            &json!({}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE Expense abc (Lunch (Food))"));
    }
}
