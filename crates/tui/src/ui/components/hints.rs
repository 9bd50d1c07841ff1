use ratatui::{style::Style, text::Span};

use crate::{
    app::{AppState, BudgetMode, Screen},
    ui::theme::Theme,
};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

/// Hints for whatever the keyboard currently drives.
pub fn for_state(state: &AppState) -> Vec<KeyHint> {
    if state.screen == Screen::Login {
        return vec![
            KeyHint::new("Tab", "switch field"),
            KeyHint::new("Enter", "sign in"),
            KeyHint::new("Ctrl+C", "quit"),
        ];
    }

    match state.mode {
        BudgetMode::Browse => vec![
            KeyHint::new("i", "income"),
            KeyHint::new("a", "add"),
            KeyHint::new("A", "add (guess)"),
            KeyHint::new("p", "paste"),
            KeyHint::new("s", "sample"),
            KeyHint::new("1-3", "category"),
            KeyHint::new("↑↓", "select"),
            KeyHint::new("d", "delete"),
            KeyHint::new("l", "logout"),
            KeyHint::new("q", "quit"),
        ],
        BudgetMode::EditIncome => vec![
            KeyHint::new("0-9", "type"),
            KeyHint::new("Enter", "done"),
            KeyHint::new("Esc", "done"),
        ],
        BudgetMode::AddExpense => vec![
            KeyHint::new("Tab", "next field"),
            KeyHint::new("←→", "category"),
            KeyHint::new("Enter", "add"),
            KeyHint::new("Esc", "cancel"),
        ],
        BudgetMode::Paste => vec![
            KeyHint::new("Tab", "tab"),
            KeyHint::new("Enter", "new line"),
            KeyHint::new("Ctrl+S", "import"),
            KeyHint::new("Esc", "cancel"),
        ],
    }
}
