use engine::Category;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{
    app::{AppState, BudgetMode, ExpenseField},
    ui::{
        components::{card::Card, centered_box},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    if state.mode != BudgetMode::AddExpense {
        return;
    }

    let theme = Theme::default();
    let form = &state.form;
    let popup = centered_box(46, 9, area);
    frame.render_widget(Clear, popup);

    let card = Card::new("add expense", &theme).focused(true);
    let inner = card.inner(popup);
    card.render_frame(frame, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category
            Constraint::Length(1),
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(Paragraph::new(category_line(form.category, form.is_guessing(), &theme)), rows[0]);
    render_field(
        frame,
        rows[2],
        "Name",
        &form.name,
        form.focus == ExpenseField::Name,
        &theme,
    );
    render_field(
        frame,
        rows[3],
        "Amount",
        &form.amount,
        form.focus == ExpenseField::Amount,
        &theme,
    );
}

fn category_line(selected: Category, guessing: bool, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled("◀ ", Style::default().fg(theme.dim))];
    for category in Category::ALL {
        let style = if category == selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.text_muted)
        };
        spans.push(Span::styled(format!(" {} ", category.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("▶", Style::default().fg(theme.dim)));
    if guessing {
        spans.push(Span::styled("  auto", Style::default().fg(theme.dim)));
    }
    Line::from(spans)
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &'static str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };
    let line = Line::from(vec![
        Span::styled(format!("{label:<8}"), Style::default().fg(theme.text_muted)),
        Span::styled(format!("{value}{cursor}"), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
