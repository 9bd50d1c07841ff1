pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{AppState, BudgetMode, Screen};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    match state.screen {
        Screen::Login => screens::login::render(frame, layout[1], state),
        Screen::Budget => {
            screens::budget::render(frame, layout[1], state);
            components::expense_form::render(frame, area, state);
            components::paste_modal::render(frame, area, state);
        }
    }
    render_bottom_bar(frame, layout[2], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = vec![Span::styled(
        "Limoneta",
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )];

    if let Some(budget) = state.budget() {
        let mode = match state.mode {
            BudgetMode::Browse => "browse",
            BudgetMode::EditIncome => "income",
            BudgetMode::AddExpense => "add",
            BudgetMode::Paste => "paste",
        };
        parts.extend([
            Span::raw("  "),
            Span::styled("User", Style::default().fg(theme.text_muted)),
            Span::raw(format!(": {}  ", state.username())),
            Span::styled("Income", Style::default().fg(theme.text_muted)),
            Span::raw(format!(": {}  ", budget.monthly_income())),
            Span::styled("Focus", Style::default().fg(theme.text_muted)),
            Span::raw(format!(": {}  ", state.focus.label())),
            Span::styled("Mode", Style::default().fg(theme.text_muted)),
            Span::raw(format!(": {mode}")),
        ]);
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = components::hints::for_state(state);
    let mut parts = vec![Span::raw(" ")];
    parts.extend(components::hints::hints_to_spans(&hints, theme));
    if let Some(budget) = state.budget() {
        parts.push(components::hints::hint_separator(theme));
        parts.push(Span::styled(
            format!("{} expenses", budget.buckets().len()),
            Style::default().fg(theme.dim),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{app::App, config::AppConfig};

    fn draw(state: &AppState) -> String {
        let mut terminal = ratatui::Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
    }

    #[test]
    fn draws_login_and_dashboard() {
        let mut app = App::new(AppConfig::default()).unwrap();
        assert!(draw(&app.state).contains("sign in"));

        type_text(&mut app, "joeyang");
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        type_text(&mut app, "1234");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        type_text(&mut app, "s");

        let screen = draw(&app.state);
        assert!(screen.contains("Rent payment"));
        assert!(screen.contains("sample"));
    }
}
