use std::fmt::Write;

use engine::{Advice, BudgetStatus, BudgetSummary, Category, ImportReport};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Serialize;

use crate::error::Result;

const BAR_WIDTH: usize = 10;

/// Machine-readable form of `summary --json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub summary: &'a BudgetSummary,
    pub advice: String,
    pub import: &'a ImportReport,
}

pub fn render_json(summary: &BudgetSummary, import: &ImportReport) -> Result<String> {
    let report = JsonReport {
        summary,
        advice: Advice::for_summary(summary).to_string(),
        import,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Plain-text table with one row per category, totals and the advice line.
pub fn render_text(summary: &BudgetSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Income: {}", summary.income);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<9} {:>5} {:>12} {:>12} {:>12} {:>8}",
        "Category", "Share", "Budget", "Spent", "Remaining", "Progress"
    );

    for category in Category::ALL {
        let row = summary.category(category);
        let remaining = match row.status {
            BudgetStatus::OnTrack => row.remaining.to_string(),
            BudgetStatus::OverBudget => format!("{} !", row.remaining),
        };
        let _ = writeln!(
            out,
            "{:<9} {:>4}% {:>12} {:>12} {:>12} {:>7}%  {}",
            category.label(),
            category.percent(),
            row.budget.to_string(),
            row.spent.to_string(),
            remaining,
            row.progress.round(),
            inline_progress_bar(row.progress, BAR_WIDTH),
        );
    }

    let _ = writeln!(
        out,
        "{:<9} {:>5} {:>12} {:>12} {:>12}",
        "Total",
        "",
        summary.income.to_string(),
        summary.total_spent.to_string(),
        summary.total_remaining.to_string(),
    );

    if !summary.income.is_zero() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", Advice::for_summary(summary));
    }
    out
}

/// Lists the lines the parser dropped and why.
pub fn render_skipped(import: &ImportReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Imported {} rows, skipped {}",
        import.imported,
        import.skipped_count()
    );
    for skipped in &import.skipped {
        let _ = writeln!(
            out,
            "  line {}: {} ({})",
            skipped.line,
            skipped.reason.describe(),
            skipped.content.replace('\t', "\\t")
        );
    }
    out
}

/// `████░░░░░░` style bar for a 0-100 progress value.
pub fn inline_progress_bar(progress: Decimal, width: usize) -> String {
    let filled = (progress.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED) * Decimal::from(width)
        / Decimal::ONE_HUNDRED)
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use engine::{BudgetState, import};
    use rust_decimal_macros::dec;

    use super::*;

    fn state() -> BudgetState {
        let mut state = BudgetState::new();
        state.set_income("5000");
        state.merge(import::parse("needs\tRent\t1200\nwants\tShoes\t1600"));
        state
    }

    #[test]
    fn text_table_rows() {
        let text = render_text(&state().summary());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Income: $5000.00");
        assert!(lines[3].starts_with("Needs       50%"));
        assert!(lines[3].contains("$1300.00"));
        assert!(lines[3].trim_end().ends_with("████░░░░░░"));
        assert!(lines[4].contains("-$100.00 !"));
        assert!(lines[6].starts_with("Total"));
        assert!(text.contains("over your wants target by $100.00"));
    }

    #[test]
    fn no_advice_without_income() {
        let text = render_text(&BudgetState::new().summary());
        assert!(!text.contains("Nice!"));
        assert!(text.starts_with("Income: $0.00"));
    }

    #[test]
    fn json_carries_summary_and_import() {
        let (batch, report) = import::parse_with_report("needs\tRent\t1200\nbogus\tX\t1");
        let mut state = BudgetState::new();
        state.set_income("5000");
        state.merge(batch);

        let json = render_json(&state.summary(), &report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["income"], "5000");
        assert_eq!(value["summary"]["categories"][0]["category"], "needs");
        assert_eq!(value["summary"]["categories"][0]["status"], "on_track");
        assert_eq!(value["import"]["imported"], 1);
        assert_eq!(value["import"]["skipped"][0]["line"], 2);
    }

    #[test]
    fn skipped_listing() {
        let (_, report) = import::parse_with_report("needs\tRent\t1200\nneeds\tOnly\tTwo");
        let text = render_skipped(&report);
        assert!(text.starts_with("Imported 1 rows, skipped 1"));
        assert!(text.contains("line 2:"));
        assert!(text.contains("needs\\tOnly\\tTwo"));
    }

    #[test]
    fn bar_is_clamped() {
        assert_eq!(inline_progress_bar(dec!(0), 4), "░░░░");
        assert_eq!(inline_progress_bar(dec!(48), 10), "████░░░░░░");
        assert_eq!(inline_progress_bar(dec!(100), 4), "████");
        assert_eq!(inline_progress_bar(dec!(-5), 4), "░░░░");
    }
}
