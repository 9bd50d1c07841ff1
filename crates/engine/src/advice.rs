use std::fmt;

use crate::{BudgetSummary, Category, Money};

/// One short nudge derived from a budget snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advice {
    /// Savings are a little short of target; suggest a small top-up.
    SaveMore(Money),
    WantsOver(Money),
    NeedsOver(Money),
    OnTrack,
}

const SMALL_SAVINGS_GAP: i64 = 20;
const MAX_TOP_UP: i64 = 5;
const SUGGESTED_TRANSFER: i64 = 10;

impl Advice {
    /// Picks the most relevant nudge: a small savings gap first, then
    /// overspending on wants, then on needs.
    pub fn for_summary(summary: &BudgetSummary) -> Self {
        let savings = summary.category(Category::Savings);
        let savings_gap = savings.budget - savings.spent;
        if savings_gap > Money::ZERO && savings_gap < Money::from(SMALL_SAVINGS_GAP) {
            return Advice::SaveMore(savings_gap.ceil().min(Money::from(MAX_TOP_UP)));
        }

        let wants = summary.category(Category::Wants);
        let wants_gap = wants.spent - wants.budget;
        if wants_gap > Money::ZERO {
            return Advice::WantsOver(wants_gap);
        }

        let needs = summary.category(Category::Needs);
        let needs_gap = needs.spent - needs.budget;
        if needs_gap > Money::ZERO {
            return Advice::NeedsOver(needs_gap);
        }

        Advice::OnTrack
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advice::SaveMore(amount) => {
                write!(f, "Try saving {amount} more this week to stay on track.")
            }
            Advice::WantsOver(amount) => write!(
                f,
                "You're over your wants target by {amount}. Consider one at-home meal or skipping a subscription."
            ),
            Advice::NeedsOver(amount) => write!(
                f,
                "Needs spending is high by {amount}. Look for small wins: reduce utilities by turning off idle devices."
            ),
            Advice::OnTrack => write!(
                f,
                "Nice! You're tracking within the 50-30-20 targets. Consider a {} automatic transfer to savings.",
                Money::from(SUGGESTED_TRANSFER)
            ),
        }
    }
}
