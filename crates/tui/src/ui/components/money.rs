use engine::{BudgetStatus, CategorySummary, Money};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Gauge,
};
use rust_decimal::prelude::ToPrimitive;

use crate::ui::theme::Theme;

/// A money amount, red when negative.
#[must_use]
pub fn styled_amount(amount: Money, theme: &Theme) -> Span<'static> {
    let color = if amount.is_negative() {
        theme.negative
    } else {
        theme.text
    };
    Span::styled(amount.to_string(), Style::default().fg(color))
}

#[must_use]
pub fn styled_amount_bold(amount: Money, theme: &Theme) -> Span<'static> {
    let span = styled_amount(amount, theme);
    let style = span.style.add_modifier(Modifier::BOLD);
    span.style(style)
}

/// `Left: $x` while under budget, `Over: $x` once spending passes it.
#[must_use]
pub fn remaining_label(summary: &CategorySummary) -> String {
    match summary.status {
        BudgetStatus::OnTrack => format!("Left: {}", summary.remaining),
        BudgetStatus::OverBudget => format!("Over: {}", summary.remaining.abs()),
    }
}

/// Green below 70% of the budget, amber up to 90%, red above or when over.
#[must_use]
pub fn progress_color(summary: &CategorySummary, theme: &Theme) -> Color {
    let ratio = progress_ratio(summary);
    if summary.status == BudgetStatus::OverBudget || ratio >= 0.9 {
        theme.negative
    } else if ratio >= 0.7 {
        theme.warning
    } else {
        theme.positive
    }
}

#[must_use]
pub fn budget_gauge(summary: &CategorySummary, theme: &Theme) -> Gauge<'static> {
    let ratio = progress_ratio(summary);
    Gauge::default()
        .gauge_style(
            Style::default()
                .fg(progress_color(summary, theme))
                .bg(theme.background),
        )
        .ratio(ratio)
        .label(format!("{}%", summary.progress.round()))
}

fn progress_ratio(summary: &CategorySummary) -> f64 {
    (summary.progress.to_f64().unwrap_or(0.0) / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use engine::{BudgetState, Category};

    use super::*;

    fn wants(income: &str, spent: &str) -> CategorySummary {
        let mut state = BudgetState::new();
        state.set_income(income);
        state.add_expense(Category::Wants, "x", spent);
        *state.summary().category(Category::Wants)
    }

    #[test]
    fn labels_switch_to_over() {
        assert_eq!(remaining_label(&wants("1000", "100")), "Left: $200.00");
        assert_eq!(remaining_label(&wants("1000", "350")), "Over: $50.00");
    }

    #[test]
    fn colors_follow_usage() {
        let theme = Theme::default();
        assert_eq!(progress_color(&wants("1000", "60"), &theme), theme.positive);
        assert_eq!(progress_color(&wants("1000", "240"), &theme), theme.warning);
        assert_eq!(progress_color(&wants("1000", "290"), &theme), theme.negative);
        assert_eq!(progress_color(&wants("0", "10"), &theme), theme.negative);
    }

    #[test]
    fn gauge_ratio_is_bounded() {
        assert_eq!(progress_ratio(&wants("1000", "900")), 1.0);
        assert_eq!(progress_ratio(&wants("1000", "150")), 0.5);
        assert_eq!(progress_ratio(&wants("0", "10")), 0.0);
    }
}
