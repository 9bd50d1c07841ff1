use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use engine::import::TEMPLATE;

use crate::{
    app::{AppState, BudgetMode},
    ui::{
        components::{card::Card, centered_rect},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    if state.mode != BudgetMode::Paste {
        return;
    }

    let theme = Theme::default();
    let popup = centered_rect(70, 60, area);
    frame.render_widget(Clear, popup);

    let card = Card::new("bulk paste", &theme).focused(true);
    let inner = card.inner(popup);
    card.render_frame(frame, popup);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let help = Paragraph::new(vec![
        Line::from(Span::styled(
            "One expense per line: Category<TAB>Name<TAB>Amount",
            Style::default().fg(theme.text_muted),
        )),
        Line::from(Span::styled(
            "Categories: needs, wants, savings. Bad lines are skipped.",
            Style::default().fg(theme.dim),
        )),
    ]);
    frame.render_widget(help, layout[0]);

    let body = if state.paste.is_empty() {
        Paragraph::new(
            TEMPLATE
                .lines()
                .map(|line| Line::from(Span::styled(show_tabs(line), Style::default().fg(theme.dim))))
                .collect::<Vec<_>>(),
        )
    } else {
        let mut lines: Vec<Line<'static>> = state
            .paste
            .split('\n')
            .map(|line| Line::from(Span::styled(show_tabs(line), Style::default().fg(theme.text))))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("│", Style::default().fg(theme.accent)));
        }
        Paragraph::new(lines)
    };
    frame.render_widget(body.wrap(Wrap { trim: false }), layout[1]);
}

/// Shows tabs as arrows.
fn show_tabs(line: &str) -> String {
    line.trim_end_matches('\r').replace('\t', " → ")
}
