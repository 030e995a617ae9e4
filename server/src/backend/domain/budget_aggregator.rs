//! Monthly spend aggregation against a budget.

use std::collections::BTreeMap;

use crate::backend::domain::models::budget::{AlertLevel, BudgetConfig, BudgetSummary, CategoryTotal};
use crate::backend::domain::models::expense::ExpenseEntry;

/// Groups a period's expenses by category and classifies the total against
/// the user's limits. Categories without entries are left out, and the
/// remaining ones are reported in category declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetAggregator;

impl BudgetAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(&self, entries: &[ExpenseEntry], config: &BudgetConfig) -> BudgetSummary {
        let mut totals = BTreeMap::new();
        for entry in entries {
            let total = totals.entry(entry.category).or_insert(0u64);
            *total = total.saturating_add(entry.amount);
        }

        let by_category: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, amount)| CategoryTotal { category, amount })
            .collect();
        // Totals clamp at u64::MAX, which still classifies as over
        let total = by_category
            .iter()
            .fold(0u64, |sum, c| sum.saturating_add(c.amount));

        BudgetSummary {
            total,
            by_category,
            alert_level: AlertLevel::classify(total, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::expense::ExpenseCategory;
    use chrono::NaiveDate;

    fn entry(category: ExpenseCategory, amount: u64) -> ExpenseEntry {
        ExpenseEntry {
            id: ExpenseEntry::generate_id(),
            user_id: "user-1".to_string(),
            amount,
            category,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            memo: None,
            created_at: "2025-06-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_groups_by_category_with_warning() {
        let entries = vec![
            entry(ExpenseCategory::Food, 1000),
            entry(ExpenseCategory::Food, 2000),
            entry(ExpenseCategory::Transport, 500),
        ];
        let config = BudgetConfig::new(5000, 3000);

        let summary = BudgetAggregator::new().aggregate(&entries, &config);

        assert_eq!(summary.total, 3500);
        assert_eq!(
            summary.by_category,
            vec![
                CategoryTotal { category: ExpenseCategory::Food, amount: 3000 },
                CategoryTotal { category: ExpenseCategory::Transport, amount: 500 },
            ]
        );
        assert_eq!(summary.alert_level, AlertLevel::Warning);
    }

    #[test]
    fn test_empty_period() {
        let summary = BudgetAggregator::new().aggregate(&[], &BudgetConfig::default());
        assert_eq!(summary.total, 0);
        assert!(summary.by_category.is_empty());
        assert_eq!(summary.alert_level, AlertLevel::Ok);
    }

    #[test]
    fn test_output_order_ignores_input_order() {
        let entries = vec![
            entry(ExpenseCategory::Other, 10),
            entry(ExpenseCategory::Hobby, 20),
            entry(ExpenseCategory::Food, 30),
        ];
        let summary = BudgetAggregator::new().aggregate(&entries, &BudgetConfig::default());
        let order: Vec<ExpenseCategory> = summary.by_category.iter().map(|c| c.category).collect();
        assert_eq!(
            order,
            vec![ExpenseCategory::Food, ExpenseCategory::Hobby, ExpenseCategory::Other]
        );
    }

    #[test]
    fn test_total_equals_sum_of_categories() {
        let categories = [
            ExpenseCategory::Food,
            ExpenseCategory::Social,
            ExpenseCategory::Transport,
            ExpenseCategory::Hobby,
            ExpenseCategory::Fixed,
            ExpenseCategory::Other,
        ];
        let aggregator = BudgetAggregator::new();
        for n in 0..40u64 {
            let entries: Vec<ExpenseEntry> = (0..n)
                .map(|i| entry(categories[(i * 7 % 6) as usize], 1 + i * 131 % 997))
                .collect();
            let summary = aggregator.aggregate(&entries, &BudgetConfig::default());
            let category_sum: u64 = summary.by_category.iter().map(|c| c.amount).sum();
            let entry_sum: u64 = entries.iter().map(|e| e.amount).sum();
            assert_eq!(summary.total, category_sum);
            assert_eq!(summary.total, entry_sum);
            assert!(summary.by_category.iter().all(|c| c.amount > 0));
        }
    }

    #[test]
    fn test_total_equal_to_limit_is_over() {
        let config = BudgetConfig::new(5000, 3000);
        let entries = vec![entry(ExpenseCategory::Fixed, 5000)];
        let summary = BudgetAggregator::new().aggregate(&entries, &config);
        assert_eq!(summary.alert_level, AlertLevel::Over);
    }

    #[test]
    fn test_one_below_limit_is_warning() {
        let config = BudgetConfig::new(5000, 3000);
        let entries = vec![entry(ExpenseCategory::Fixed, 4999)];
        let summary = BudgetAggregator::new().aggregate(&entries, &config);
        assert_eq!(summary.alert_level, AlertLevel::Warning);
    }

    #[test]
    fn test_total_equal_to_threshold_is_warning() {
        let config = BudgetConfig::new(5000, 3000);
        let entries = vec![entry(ExpenseCategory::Social, 3000)];
        let summary = BudgetAggregator::new().aggregate(&entries, &config);
        assert_eq!(summary.alert_level, AlertLevel::Warning);
    }

    #[test]
    fn test_same_input_same_output() {
        let entries = vec![entry(ExpenseCategory::Food, 1), entry(ExpenseCategory::Social, 2)];
        let config = BudgetConfig::default();
        let aggregator = BudgetAggregator::new();
        assert_eq!(aggregator.aggregate(&entries, &config), aggregator.aggregate(&entries, &config));
    }

    #[test]
    fn test_huge_amounts_clamp_instead_of_overflowing() {
        let big = i64::MAX as u64;
        let entries = vec![
            entry(ExpenseCategory::Food, big),
            entry(ExpenseCategory::Food, big),
            entry(ExpenseCategory::Food, big),
            entry(ExpenseCategory::Social, big),
        ];

        let summary = BudgetAggregator::new().aggregate(&entries, &BudgetConfig::default());
        assert_eq!(summary.by_category[0].amount, u64::MAX);
        assert_eq!(summary.by_category[1].amount, big);
        assert_eq!(summary.total, u64::MAX);
        assert_eq!(summary.alert_level, AlertLevel::Over);
    }
}
