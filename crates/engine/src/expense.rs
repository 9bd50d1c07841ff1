use serde::{Deserialize, Serialize};

use crate::{Category, Money};

/// A single expense line.
///
/// Records are immutable once created; removing one is the only way to get
/// rid of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub name: String,
    pub amount: Money,
}

impl ExpenseRecord {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Ordered expense records grouped by category.
///
/// Used both for the live budget state and for a freshly parsed import
/// batch, so merging is a plain per-category append.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buckets {
    pub needs: Vec<ExpenseRecord>,
    pub wants: Vec<ExpenseRecord>,
    pub savings: Vec<ExpenseRecord>,
}

impl Buckets {
    #[must_use]
    pub fn get(&self, category: Category) -> &[ExpenseRecord] {
        match category {
            Category::Needs => &self.needs,
            Category::Wants => &self.wants,
            Category::Savings => &self.savings,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<ExpenseRecord> {
        match category {
            Category::Needs => &mut self.needs,
            Category::Wants => &mut self.wants,
            Category::Savings => &mut self.savings,
        }
    }

    pub fn push(&mut self, category: Category, record: ExpenseRecord) {
        self.get_mut(category).push(record);
    }

    /// Moves every record of `other` to the end of the matching bucket,
    /// keeping their order.
    pub fn append(&mut self, mut other: Buckets) {
        for category in Category::ALL {
            self.get_mut(category).append(other.get_mut(category));
        }
    }

    /// Total number of records across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.needs.len() + self.wants.len() + self.savings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.needs.clear();
        self.wants.clear();
        self.savings.clear();
    }

    /// Iterates records category by category, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &ExpenseRecord)> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.get(category).iter().map(move |r| (category, r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, amount: i64) -> ExpenseRecord {
        ExpenseRecord::new(name, Money::from(amount))
    }

    #[test]
    fn append_keeps_existing_records_first() {
        let mut buckets = Buckets::default();
        buckets.push(Category::Needs, record("Rent", 1200));

        let mut batch = Buckets::default();
        batch.push(Category::Needs, record("Water", 40));
        batch.push(Category::Savings, record("Fund", 400));
        buckets.append(batch);

        assert_eq!(buckets.needs, vec![record("Rent", 1200), record("Water", 40)]);
        assert_eq!(buckets.savings, vec![record("Fund", 400)]);
        assert!(buckets.wants.is_empty());
        assert_eq!(buckets.len(), 3);
    }

    #[test]
    fn iter_walks_in_display_order() {
        let mut buckets = Buckets::default();
        buckets.push(Category::Savings, record("Fund", 1));
        buckets.push(Category::Needs, record("Rent", 2));
        buckets.push(Category::Wants, record("Movie", 3));

        let order: Vec<_> = buckets.iter().map(|(c, r)| (c, r.name.as_str())).collect();
        assert_eq!(
            order,
            vec![
                (Category::Needs, "Rent"),
                (Category::Wants, "Movie"),
                (Category::Savings, "Fund"),
            ]
        );
    }
}
