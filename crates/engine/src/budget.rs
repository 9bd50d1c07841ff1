//! The 50/30/20 budget state and its derived figures.
//!
//! [`BudgetState`] only stores the raw inputs (income and expense records).
//! Budgets, totals and progress are recomputed on every read, either through
//! the per-category accessors or as a whole [`BudgetSummary`] snapshot.
//!
//! Nothing here returns an error: unparseable income becomes `0`, incomplete
//! expense entries are ignored and out-of-range removals do nothing.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{Buckets, Category, ExpenseRecord, Money};

/// Income and expense records of one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BudgetState {
    income_input: String,
    monthly_income: Money,
    buckets: Buckets,
}

impl BudgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the monthly income from user text.
    ///
    /// The raw text is kept as typed; the numeric value falls back to `0`
    /// when the text does not start with a number or is negative.
    pub fn set_income(&mut self, value: impl ToString) {
        let input = value.to_string();
        self.monthly_income = Money::parse_lenient(&input)
            .filter(|amount| !amount.is_negative())
            .unwrap_or(Money::ZERO);
        self.income_input = input;
    }

    /// Income exactly as entered.
    pub fn income_input(&self) -> &str {
        &self.income_input
    }

    pub fn monthly_income(&self) -> Money {
        self.monthly_income
    }

    /// Appends an expense to `category`.
    ///
    /// Ignored unless `name` is non-empty and `amount` is non-empty and
    /// starts with a number. Returns whether a record was added.
    pub fn add_expense(&mut self, category: Category, name: &str, amount: &str) -> bool {
        if name.is_empty() || amount.is_empty() {
            return false;
        }
        let Some(amount) = Money::parse_lenient(amount) else {
            return false;
        };
        self.buckets
            .push(category, ExpenseRecord::new(name, amount));
        true
    }

    /// Removes the record at `index` of `category`, if there is one.
    pub fn remove_expense(&mut self, category: Category, index: usize) -> Option<ExpenseRecord> {
        let bucket = self.buckets.get_mut(category);
        (index < bucket.len()).then(|| bucket.remove(index))
    }

    /// Appends an imported batch after the existing records.
    pub fn merge(&mut self, batch: Buckets) {
        self.buckets.append(batch);
    }

    pub fn expenses(&self, category: Category) -> &[ExpenseRecord] {
        self.buckets.get(category)
    }

    pub fn buckets(&self) -> &Buckets {
        &self.buckets
    }

    /// Clears the income and every bucket.
    pub fn reset(&mut self) {
        self.income_input.clear();
        self.monthly_income = Money::ZERO;
        self.buckets.clear();
    }

    pub fn budget_for(&self, category: Category) -> Money {
        self.monthly_income.scale(category.share())
    }

    pub fn spent_for(&self, category: Category) -> Money {
        self.buckets.get(category).iter().map(|r| r.amount).sum()
    }

    /// Budget left in `category`; negative when over budget.
    pub fn remaining_for(&self, category: Category) -> Money {
        self.budget_for(category) - self.spent_for(category)
    }

    /// Builds an immutable snapshot of every derived figure.
    pub fn summary(&self) -> BudgetSummary {
        let categories = Category::ALL.map(|category| {
            let budget = self.budget_for(category);
            let spent = self.spent_for(category);
            CategorySummary::new(category, budget, spent)
        });
        let total_spent: Money = categories.iter().map(|c| c.spent).sum();

        BudgetSummary {
            income: self.monthly_income,
            total_spent,
            total_remaining: self.monthly_income - total_spent,
            categories,
        }
    }
}

/// Share of `budget` already spent, as a percentage capped at 100.
///
/// A zero budget yields `0` whatever was spent; overspending then only shows
/// through the remaining amount.
pub fn progress_percentage(spent: Money, budget: Money) -> Decimal {
    if budget.is_zero() {
        return Decimal::ZERO;
    }
    let hundred = Decimal::ONE_HUNDRED;
    let percent = spent
        .amount()
        .checked_div(budget.amount())
        .and_then(|ratio| ratio.checked_mul(hundred))
        .unwrap_or(hundred);
    percent.min(hundred)
}

/// Whether a category still has budget left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    OverBudget,
}

/// Derived figures of one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
    pub progress: Decimal,
    pub status: BudgetStatus,
}

impl CategorySummary {
    fn new(category: Category, budget: Money, spent: Money) -> Self {
        let remaining = budget - spent;
        let status = if remaining.is_negative() {
            BudgetStatus::OverBudget
        } else {
            BudgetStatus::OnTrack
        };
        Self {
            category,
            budget,
            spent,
            remaining,
            progress: progress_percentage(spent, budget),
            status,
        }
    }
}

/// Snapshot of a [`BudgetState`] at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub income: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    pub categories: [CategorySummary; 3],
}

impl BudgetSummary {
    pub fn category(&self, category: Category) -> &CategorySummary {
        &self.categories[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(value: Decimal) -> Money {
        Money::new(value)
    }

    #[test]
    fn income_splits_fifty_thirty_twenty() {
        let mut state = BudgetState::new();
        state.set_income("5000");
        assert_eq!(state.budget_for(Category::Needs), money(dec!(2500)));
        assert_eq!(state.budget_for(Category::Wants), money(dec!(1500)));
        assert_eq!(state.budget_for(Category::Savings), money(dec!(1000)));
    }

    #[test]
    fn budgets_always_add_up_to_income() {
        let mut state = BudgetState::new();
        for input in ["0", "0.01", "1", "333.33", "5000", "12345.67", "99999999.99"] {
            state.set_income(input);
            let total: Money = Category::ALL.iter().map(|c| state.budget_for(*c)).sum();
            assert_eq!(total, state.monthly_income(), "income {input}");
        }
    }

    #[test]
    fn invalid_income_falls_back_to_zero() {
        let mut state = BudgetState::new();
        state.set_income("abc");
        assert_eq!(state.monthly_income(), Money::ZERO);
        assert_eq!(state.income_input(), "abc");

        state.set_income("");
        assert_eq!(state.monthly_income(), Money::ZERO);

        state.set_income("-100");
        assert_eq!(state.monthly_income(), Money::ZERO);

        state.set_income(4200);
        assert_eq!(state.monthly_income(), Money::from(4200));
    }

    #[test]
    fn out_of_range_income_falls_back_to_zero() {
        let mut state = BudgetState::new();
        state.set_income("1e30");
        assert_eq!(state.monthly_income(), Money::ZERO);
        assert_eq!(state.income_input(), "1e30");

        state.set_income("1e20");
        assert_eq!(state.monthly_income(), money(dec!(100000000000000000000)));
    }

    #[test]
    fn add_expense_requires_name_and_amount() {
        let mut state = BudgetState::new();
        assert!(!state.add_expense(Category::Needs, "", "10"));
        assert!(!state.add_expense(Category::Needs, "Rent", ""));
        assert!(!state.add_expense(Category::Needs, "Rent", "abc"));
        assert!(state.expenses(Category::Needs).is_empty());

        assert!(state.add_expense(Category::Needs, "Refund", "-25"));
        assert_eq!(state.spent_for(Category::Needs), Money::from(-25));
    }

    #[test]
    fn remove_expense_by_index() {
        let mut state = BudgetState::new();
        for name in ["A", "B", "C"] {
            state.add_expense(Category::Wants, name, "1");
        }

        let removed = state.remove_expense(Category::Wants, 1);
        assert_eq!(removed.map(|r| r.name), Some("B".to_string()));
        let names: Vec<_> = state
            .expenses(Category::Wants)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);

        assert_eq!(state.remove_expense(Category::Wants, 7), None);
        assert_eq!(state.expenses(Category::Wants).len(), 2);
    }

    #[test]
    fn remaining_can_go_negative() {
        let mut state = BudgetState::new();
        state.set_income("1000");
        state.add_expense(Category::Savings, "Fund", "250");
        assert_eq!(state.remaining_for(Category::Savings), Money::from(-50));

        let summary = state.summary();
        let savings = summary.category(Category::Savings);
        assert_eq!(savings.status, BudgetStatus::OverBudget);
        assert_eq!(savings.progress, dec!(100));
    }

    #[test]
    fn progress_is_guarded_and_capped() {
        assert_eq!(progress_percentage(Money::from(500), Money::ZERO), Decimal::ZERO);
        assert_eq!(progress_percentage(Money::from(1200), Money::from(2500)), dec!(48));
        assert_eq!(progress_percentage(Money::from(9000), Money::from(10)), dec!(100));
        assert_eq!(progress_percentage(Money::ZERO, Money::from(10)), Decimal::ZERO);
    }

    #[test]
    fn progress_stays_within_bounds_for_non_negative_inputs() {
        let budgets = [dec!(0.01), dec!(1), dec!(3), dec!(2500), dec!(1000000)];
        let spent = [dec!(0), dec!(0.005), dec!(1), dec!(2499.99), dec!(7000000)];
        for b in budgets {
            for s in spent {
                let p = progress_percentage(money(s), money(b));
                assert!(p >= Decimal::ZERO && p <= dec!(100), "{s}/{b} -> {p}");
            }
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = BudgetState::new();
        state.set_income("5000");
        state.add_expense(Category::Needs, "Rent", "1200");
        state.reset();
        assert_eq!(state, BudgetState::default());
    }

    #[test]
    fn summary_totals() {
        let mut state = BudgetState::new();
        state.set_income("5000");
        state.add_expense(Category::Needs, "Rent", "1200");
        state.add_expense(Category::Wants, "Dining Out", "150");

        let summary = state.summary();
        assert_eq!(summary.income, Money::from(5000));
        assert_eq!(summary.total_spent, Money::from(1350));
        assert_eq!(summary.total_remaining, Money::from(3650));
        let needs = summary.category(Category::Needs);
        assert_eq!(needs.remaining, Money::from(1300));
        assert_eq!(needs.status, BudgetStatus::OnTrack);
    }
}
