use engine::{Advice, BudgetState, BudgetSummary, Category, CategorySummary};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    app::{AppState, BudgetMode},
    ui::{
        components::{
            card::{Card, StatCard},
            money::{budget_gauge, progress_color, remaining_label, styled_amount, styled_amount_bold},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let Some(budget) = state.budget() else {
        return;
    };
    let summary = budget.summary();
    let has_income = !summary.income.is_zero();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Income and totals
            Constraint::Length(if has_income { 6 } else { 3 }),
            Constraint::Min(5), // Expense lists
            Constraint::Length(3),
        ])
        .split(area);

    render_totals(frame, layout[0], state, budget, &summary, &theme);
    if has_income {
        render_categories(frame, layout[1], state, &summary, &theme);
    } else {
        let hint = Paragraph::new(Span::styled(
            "Enter your monthly income (press i) to see your 50/30/20 budget.",
            Style::default().fg(theme.text_muted),
        ));
        Card::new("budget", &theme).render_with(frame, layout[1], hint);
    }
    render_expenses(frame, layout[2], state, budget, &theme);
    if has_income {
        render_advice(frame, layout[3], &summary, &theme);
    }
}

fn render_totals(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    budget: &BudgetState,
    summary: &BudgetSummary,
    theme: &Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let editing = state.mode == BudgetMode::EditIncome;
    let raw = budget.income_input();
    let (value, subtitle) = if editing {
        (format!("{raw}│"), format!("= {}", summary.income))
    } else if raw.is_empty() {
        ("-".to_string(), "press i to edit".to_string())
    } else {
        (summary.income.to_string(), "press i to edit".to_string())
    };
    let income_color = if editing { theme.accent } else { theme.text };
    StatCard::new("monthly income", value, theme)
        .color(income_color)
        .subtitle(subtitle)
        .render(frame, cols[0]);

    StatCard::new("spent", summary.total_spent.to_string(), theme)
        .subtitle(format!("{} expenses", budget.buckets().len()))
        .render(frame, cols[1]);

    let remaining_color = if summary.total_remaining.is_negative() {
        theme.negative
    } else {
        theme.positive
    };
    StatCard::new("remaining", summary.total_remaining.to_string(), theme)
        .color(remaining_color)
        .render(frame, cols[2]);
}

fn render_categories(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    summary: &BudgetSummary,
    theme: &Theme,
) {
    let cols = category_columns(area);
    for category in Category::ALL {
        let area = cols[category.index()];
        let figures = summary.category(category);
        let title = format!("{} {}%", category.label(), category.percent());
        let card = Card::new(title, theme).focused(state.focus == category);
        let inner = card.inner(area);
        card.render_frame(frame, area);
        render_category_body(frame, inner, figures, theme);
    }
}

fn render_category_body(frame: &mut Frame<'_>, area: Rect, figures: &CategorySummary, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let muted = Style::default().fg(theme.text_muted);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Budget ", muted),
            styled_amount_bold(figures.budget, theme),
        ])),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Spent  ", muted),
            styled_amount(figures.spent, theme),
        ])),
        rows[1],
    );
    frame.render_widget(budget_gauge(figures, theme), rows[2]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            remaining_label(figures),
            Style::default().fg(progress_color(figures, theme)),
        )),
        rows[3],
    );
}

fn render_expenses(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    budget: &BudgetState,
    theme: &Theme,
) {
    let cols = category_columns(area);
    for category in Category::ALL {
        let area = cols[category.index()];
        let records = budget.expenses(category);
        let focused = state.focus == category;
        let title = format!("{} expenses ({})", category.label(), records.len());
        let card = Card::new(title, theme).focused(focused);
        let inner = card.inner(area);
        card.render_frame(frame, area);

        if records.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No expenses yet", Style::default().fg(theme.dim))),
                inner,
            );
            continue;
        }

        let width = inner.width.saturating_sub(2) as usize;
        let items = records
            .iter()
            .map(|record| {
                let amount = record.amount.to_string();
                let name_width = width.saturating_sub(amount.chars().count() + 1);
                let name: String = record.name.chars().take(name_width).collect();
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{name:<name_width$} "), Style::default().fg(theme.text)),
                    styled_amount(record.amount, theme),
                ]))
            })
            .collect::<Vec<_>>();

        let mut list_state = ListState::default();
        if focused {
            list_state.select(Some(state.selected_in(category).min(records.len() - 1)));
        }

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("» ");
        frame.render_stateful_widget(list, inner, &mut list_state);
    }
}

fn render_advice(frame: &mut Frame<'_>, area: Rect, summary: &BudgetSummary, theme: &Theme) {
    let advice = Advice::for_summary(summary);
    let color = match advice {
        Advice::OnTrack => theme.positive,
        Advice::SaveMore(_) => theme.warning,
        Advice::WantsOver(_) | Advice::NeedsOver(_) => theme.negative,
    };
    let text = Paragraph::new(Span::styled(advice.to_string(), Style::default().fg(color)))
        .wrap(Wrap { trim: true });
    Card::new("advice", theme).render_with(frame, area, text);
}

fn category_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area)
}
