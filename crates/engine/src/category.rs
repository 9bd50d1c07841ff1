use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// One of the three 50/30/20 buckets.
///
/// The shares are fixed and always add up to the whole income:
///
/// | Category | Share |
/// |----------|-------|
/// | Needs    | 0.50  |
/// | Wants    | 0.30  |
/// | Savings  | 0.20  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Needs,
    Wants,
    Savings,
}

const SAVINGS_KEYWORDS: &[&str] = &[
    "transfer to savings",
    "deposit to savings",
    "stash",
    "acorns",
    "roth",
    "brokerage",
    "vanguard",
    "fidelity",
];

const NEEDS_KEYWORDS: &[&str] = &[
    "rent",
    "mortgage",
    "utility",
    "electric",
    "water",
    "coned",
    "con ed",
    "national grid",
    "grocery",
    "trader joe",
    "aldi",
    "whole foods",
    "market",
    "supermarket",
    "mta",
    "metrocard",
    "uber",
    "lyft",
    "gas",
    "fuel",
    "insurance",
    "copay",
    "pharmacy",
    "cvs",
    "walgreens",
];

const WANTS_KEYWORDS: &[&str] = &[
    "restaurant",
    "cafe",
    "coffee",
    "starbucks",
    "dunkin",
    "pizza",
    "chipotle",
    "takeout",
    "netflix",
    "spotify",
    "hulu",
    "disney",
    "prime video",
    "amc",
    "movie",
    "game",
    "concert",
    "sephora",
    "ulta",
    "nike",
    "adidas",
    "target",
    "amazon",
    "fashion",
    "clothes",
    "electronics",
];

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Needs, Category::Wants, Category::Savings];

    /// Human readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Needs => "Needs",
            Category::Wants => "Wants",
            Category::Savings => "Savings",
        }
    }

    /// Canonical lower-case label, as written in import files.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Category::Needs => "needs",
            Category::Wants => "wants",
            Category::Savings => "savings",
        }
    }

    /// Fraction of the monthly income allotted to this category.
    #[must_use]
    pub const fn share(self) -> Decimal {
        match self {
            Category::Needs => Decimal::from_parts(50, 0, 0, false, 2),
            Category::Wants => Decimal::from_parts(30, 0, 0, false, 2),
            Category::Savings => Decimal::from_parts(20, 0, 0, false, 2),
        }
    }

    /// Share rendered as a whole percentage (`50`, `30`, `20`).
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Category::Needs => 50,
            Category::Wants => 30,
            Category::Savings => 20,
        }
    }

    /// Position of the category inside [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Category::Needs => 0,
            Category::Wants => 1,
            Category::Savings => 2,
        }
    }

    /// Resolves a user supplied label (trimmed, case-insensitive).
    ///
    /// Singular and plural forms are accepted: `need`/`needs`, `want`/`wants`,
    /// `saving`/`savings`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "needs" | "need" => Some(Category::Needs),
            "wants" | "want" => Some(Category::Wants),
            "savings" | "saving" => Some(Category::Savings),
            _ => None,
        }
    }

    /// Guesses the category of a free-text expense description.
    ///
    /// Savings keywords win over needs, needs over wants. Transit words
    /// (`metro`, `bus`) only count when no keyword matched; anything
    /// unrecognised lands in Wants.
    #[must_use]
    pub fn guess(description: &str) -> Self {
        let d = description.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| d.contains(k));

        if matches(SAVINGS_KEYWORDS) {
            return Category::Savings;
        }
        if matches(NEEDS_KEYWORDS) {
            return Category::Needs;
        }
        if matches(WANTS_KEYWORDS) {
            return Category::Wants;
        }
        if matches(&["metro", "bus"]) {
            return Category::Needs;
        }
        Category::Wants
    }

    /// Next category in display order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Category::Needs => Category::Wants,
            Category::Wants => Category::Savings,
            Category::Savings => Category::Needs,
        }
    }

    /// Previous category in display order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Category::Needs => Category::Savings,
            Category::Wants => Category::Needs,
            Category::Savings => Category::Wants,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Category::from_label(value).ok_or_else(|| EngineError::UnknownCategory(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_sum_to_one() {
        let total: Decimal = Category::ALL.iter().map(|c| c.share()).sum();
        assert_eq!(total, Decimal::ONE);
    }

    #[test]
    fn labels_resolve_case_insensitively() {
        assert_eq!(Category::from_label("Needs"), Some(Category::Needs));
        assert_eq!(Category::from_label(" need "), Some(Category::Needs));
        assert_eq!(Category::from_label("WANT"), Some(Category::Wants));
        assert_eq!(Category::from_label("saving"), Some(Category::Savings));
        assert_eq!(Category::from_label("Savings\r"), Some(Category::Savings));
        assert_eq!(Category::from_label("bogus"), None);
        assert_eq!(Category::from_label(""), None);
    }

    #[test]
    fn try_from_reports_unknown_label() {
        let err = Category::try_from("misc").unwrap_err();
        assert_eq!(err, EngineError::UnknownCategory("misc".to_string()));
    }

    #[test]
    fn guess_prefers_savings_then_needs() {
        assert_eq!(Category::guess("Transfer to Savings"), Category::Savings);
        assert_eq!(Category::guess("Rent payment"), Category::Needs);
        assert_eq!(Category::guess("Grocery - Trader Joe's"), Category::Needs);
        assert_eq!(Category::guess("MTA MetroCard"), Category::Needs);
        assert_eq!(Category::guess("Restaurant - Pizza Night"), Category::Wants);
        assert_eq!(Category::guess("Streaming Subscription"), Category::Wants);
        assert_eq!(Category::guess("City bus pass"), Category::Needs);
        assert_eq!(Category::guess("Bus to the concert"), Category::Wants);
    }

    #[test]
    fn next_and_prev_cycle() {
        for category in Category::ALL {
            assert_eq!(category.next().prev(), category);
        }
        assert_eq!(Category::Savings.next(), Category::Needs);
    }
}
