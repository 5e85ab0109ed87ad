//! Groups current-window spending by category and ranks the top categories.

use indexmap::IndexMap;

use crate::expense::Expense;

/// The maximum number of entries in the top-categories ranking.
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Sum the current-window amounts per category.
///
/// The map preserves first-seen-in-input order, which fixes the tie-break
/// behaviour of [top_categories] instead of leaving it to whatever a hash
/// map happens to iterate.
pub fn category_breakdown(current: &[&Expense]) -> IndexMap<String, f64> {
    let mut breakdown: IndexMap<String, f64> = IndexMap::new();

    for expense in current {
        *breakdown.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }

    breakdown
}

/// The categories with the highest spend, descending by sum, at most
/// [TOP_CATEGORY_LIMIT] entries.
///
/// Categories with equal sums keep their first-seen-in-input order: the
/// sort is stable over the insertion-ordered breakdown.
pub fn top_categories(breakdown: &IndexMap<String, f64>) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = breakdown
        .iter()
        .map(|(category, sum)| (category.clone(), *sum))
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(TOP_CATEGORY_LIMIT);

    ranked
}
