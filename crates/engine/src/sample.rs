use rust_decimal::Decimal;

use crate::{Buckets, Category, ExpenseRecord, Money};

/// Purchases used to seed an empty budget for a quick look around.
const SAMPLE_PURCHASES: [(&str, i64); 6] = [
    ("Rent payment", 90000),
    ("Grocery - Trader Joe's", 6422),
    ("MTA MetroCard", 3300),
    ("Restaurant - Pizza Night", 2250),
    ("Streaming Subscription", 1299),
    ("Transfer to Savings", 5000),
];

/// Demo expenses, each placed in the bucket [`Category::guess`] picks for
/// its description. Merge the result into a [`crate::BudgetState`].
pub fn sample_seed() -> Buckets {
    let mut buckets = Buckets::default();
    for (description, cents) in SAMPLE_PURCHASES {
        let amount = Money::new(Decimal::new(cents, 2));
        buckets.push(Category::guess(description), ExpenseRecord::new(description, amount));
    }
    buckets
}
