//! Category breakdown

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{ExpenseRecord, Money};

/// Total spending for one category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    /// Label exactly as found on the records (may be empty)
    pub category: String,
    #[serde(with = "crate::models::money::as_decimal")]
    pub total: Money,
    /// Number of records in this bucket
    pub count: usize,
}

impl CategoryTotal {
    /// Share of `grand_total` in percent, 0 when there is no spending at all
    pub fn share_of(&self, grand_total: Money) -> f64 {
        if grand_total.is_zero() {
            0.0
        } else {
            self.total.cents() as f64 / grand_total.cents() as f64 * 100.0
        }
    }
}

/// Sum expenses per category label
///
/// Labels are matched verbatim (case-sensitive, untrimmed). Records with an
/// empty label share a single bucket under the empty label. Entries come
/// out in order of first appearance. Dates play no part here.
pub fn category_breakdown(records: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: record.category.clone(),
                total: Money::zero(),
                count: 0,
            });
            totals.len() - 1
        });

        totals[slot].total += record.amount;
        totals[slot].count += 1;
    }

    totals
}

/// The `limit` largest categories, biggest first (ties keep breakdown order)
pub fn top_categories(breakdown: &[CategoryTotal], limit: usize) -> Vec<&CategoryTotal> {
    let mut ranked: Vec<&CategoryTotal> = breakdown.iter().collect();
    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(id: &str, cents: i64, category: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            id,
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    fn totals(breakdown: &[CategoryTotal]) -> Vec<(&str, i64)> {
        breakdown
            .iter()
            .map(|c| (c.category.as_str(), c.total.cents()))
            .collect()
    }

    #[test]
    fn test_groups_by_label() {
        let records = vec![
            expense("1", 5000, "Food"),
            expense("2", 3000, "Food"),
            expense("3", 2000, "Transport"),
        ];

        let breakdown = category_breakdown(&records);

        assert_eq!(totals(&breakdown), vec![("Food", 8000), ("Transport", 2000)]);
        assert_eq!(breakdown[0].count, 2);
        assert_eq!(breakdown[1].count, 1);
    }

    #[test]
    fn test_huge_totals_saturate() {
        let records = vec![
            expense("1", i64::MAX / 2 + 1, "Food"),
            expense("2", i64::MAX / 2 + 1, "Food"),
        ];

        let breakdown = category_breakdown(&records);

        assert_eq!(totals(&breakdown), vec![("Food", i64::MAX)]);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let records = vec![expense("1", 100, "Food"), expense("2", 200, "food")];
        assert_eq!(
            totals(&category_breakdown(&records)),
            vec![("Food", 100), ("food", 200)]
        );
    }

    #[test]
    fn test_empty_label_gets_its_own_bucket() {
        let records = vec![
            expense("1", 100, ""),
            expense("2", 200, "Bills"),
            expense("3", 300, ""),
        ];
        assert_eq!(
            totals(&category_breakdown(&records)),
            vec![("", 400), ("Bills", 200)]
        );
    }

    #[test]
    fn test_undated_records_still_count() {
        let mut undated = expense("1", 700, "Health");
        undated.date = Some("??".into());
        let breakdown = category_breakdown(&[undated]);
        assert_eq!(totals(&breakdown), vec![("Health", 700)]);
    }

    #[test]
    fn test_share_and_top() {
        let records = vec![
            expense("1", 100, "A"),
            expense("2", 300, "B"),
            expense("3", 600, "C"),
        ];
        let breakdown = category_breakdown(&records);
        let grand: Money = breakdown.iter().map(|c| c.total).sum();

        assert!((breakdown[2].share_of(grand) - 60.0).abs() < 1e-9);
        assert_eq!(breakdown[0].share_of(Money::zero()), 0.0);

        let top = top_categories(&breakdown, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, "C");
        assert_eq!(top[1].category, "B");
    }
}
