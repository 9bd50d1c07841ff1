mod expense_form;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{BudgetState, Category, Credentials, Session, StaticAuthenticator, import};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use expense_form::{ExpenseField, ExpenseForm};

const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Budget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub message: Option<String>,
}

impl LoginState {
    fn prefilled(username: &str) -> Self {
        let focus = if username.is_empty() {
            LoginField::Username
        } else {
            LoginField::Password
        };
        Self {
            username: username.to_string(),
            password: String::new(),
            focus,
            message: None,
        }
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

/// What the dashboard keys currently drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetMode {
    Browse,
    EditIncome,
    AddExpense,
    Paste,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    shown_at: Instant,
}

impl ToastState {
    fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub login: LoginState,
    pub session: Session<StaticAuthenticator>,
    pub mode: BudgetMode,
    pub focus: Category,
    /// Selected row per category, indexed by [`Category::index`].
    pub selected: [usize; 3],
    pub form: ExpenseForm,
    pub paste: String,
    pub toast: Option<ToastState>,
}

impl AppState {
    /// Budget data of the signed-in user.
    pub fn budget(&self) -> Option<&BudgetState> {
        self.session.state()
    }

    pub fn selected_in(&self, category: Category) -> usize {
        self.selected[category.index()]
    }

    pub fn username(&self) -> &str {
        self.session
            .token()
            .map_or(self.login.username.as_str(), |token| token.username())
    }
}

pub struct App {
    config: AppConfig,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let authenticator =
            StaticAuthenticator::new(config.auth.username.as_str(), config.auth.password.as_str())?;
        let state = AppState {
            screen: Screen::Login,
            login: LoginState::prefilled(&config.username),
            session: Session::new(authenticator),
            mode: BudgetMode::Browse,
            focus: Category::Needs,
            selected: [0; 3],
            form: ExpenseForm::default(),
            paste: String::new(),
            toast: None,
        };

        Ok(Self {
            config,
            state,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.expire_toast();
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Paste(text) => self.handle_paste(&text),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn expire_toast(&mut self) {
        if self
            .state
            .toast
            .as_ref()
            .is_some_and(|toast| toast.shown_at.elapsed() >= TOAST_TTL)
        {
            self.state.toast = None;
        }
    }

    fn toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.state.toast = Some(ToastState::new(message, level));
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.state.screen {
            Screen::Login => self.handle_login_key(action),
            Screen::Budget => match self.state.mode {
                BudgetMode::Browse => self.handle_browse_key(action),
                BudgetMode::EditIncome => self.handle_income_key(action),
                BudgetMode::AddExpense => self.handle_form_key(action),
                BudgetMode::Paste => self.handle_paste_key(action),
            },
        }
    }

    /// Text delivered by the terminal's bracketed paste.
    pub fn handle_paste(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let text = text.as_str();
        match self.state.screen {
            Screen::Login => {
                let line = text.lines().next().unwrap_or_default();
                self.state.login.active_field_mut().push_str(line);
            }
            Screen::Budget => match self.state.mode {
                BudgetMode::Browse => {
                    self.state.paste = text.to_string();
                    self.state.mode = BudgetMode::Paste;
                }
                BudgetMode::Paste => self.state.paste.push_str(text),
                BudgetMode::EditIncome => {
                    let line = text.lines().next().unwrap_or_default();
                    self.edit_income(|input| input.push_str(line));
                }
                BudgetMode::AddExpense => self.state.form.push_str(text),
            },
        }
    }

    fn handle_login_key(&mut self, action: AppAction) {
        match action {
            AppAction::NextField | AppAction::Up | AppAction::Down => {
                self.state.login.focus = match self.state.login.focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
            }
            AppAction::Submit => self.attempt_login(),
            AppAction::Backspace => {
                self.state.login.active_field_mut().pop();
            }
            AppAction::Input(ch) => self.state.login.active_field_mut().push(ch),
            AppAction::Cancel => self.state.login.message = None,
            _ => {}
        }
    }

    fn attempt_login(&mut self) {
        let credentials = Credentials::new(
            self.state.login.username.as_str(),
            self.state.login.password.as_str(),
        );

        match self.state.session.login(&credentials) {
            Ok(token) => {
                let greeting = format!("Welcome, {}", token.username());
                self.state.screen = Screen::Budget;
                self.state.mode = BudgetMode::Browse;
                self.state.focus = Category::Needs;
                self.state.selected = [0; 3];
                self.state.login.password.clear();
                self.state.login.message = None;
                self.toast(greeting, ToastLevel::Success);
            }
            Err(err) => {
                self.state.login.password.clear();
                self.state.login.message = Some(err.to_string());
            }
        }
    }

    fn logout(&mut self) {
        self.state.session.logout();
        self.state.screen = Screen::Login;
        self.state.mode = BudgetMode::Browse;
        self.state.login = LoginState::prefilled(&self.config.username);
        self.state.form = ExpenseForm::default();
        self.state.paste.clear();
        self.toast("Signed out", ToastLevel::Info);
    }

    fn handle_browse_key(&mut self, action: AppAction) {
        match action {
            AppAction::Input('q') => self.should_quit = true,
            AppAction::Input('i') => self.state.mode = BudgetMode::EditIncome,
            AppAction::Input('a') => self.open_form(ExpenseForm::for_category(self.state.focus)),
            AppAction::Input('A') => self.open_form(ExpenseForm::guessing()),
            AppAction::Input('p') => {
                self.state.paste.clear();
                self.state.mode = BudgetMode::Paste;
            }
            AppAction::Input('l') => self.logout(),
            AppAction::Input('s') => self.add_sample(),
            AppAction::Input(ch @ '1'..='3') => {
                let index = ch as usize - '1' as usize;
                self.state.focus = Category::ALL[index];
            }
            AppAction::Left => self.state.focus = self.state.focus.prev(),
            AppAction::Right | AppAction::NextField => self.state.focus = self.state.focus.next(),
            AppAction::Up => self.move_selection(false),
            AppAction::Down => self.move_selection(true),
            AppAction::Input('d') | AppAction::Delete => self.remove_selected(),
            _ => {}
        }
    }

    fn add_sample(&mut self) {
        let Some(budget) = self.state.session.state_mut() else {
            return;
        };
        let seed = engine::sample_seed();
        let count = seed.len();
        budget.merge(seed);
        tracing::info!(count, "sample expenses added");
        self.toast(format!("Added {count} sample expenses"), ToastLevel::Success);
    }

    fn open_form(&mut self, form: ExpenseForm) {
        self.state.form = form;
        self.state.mode = BudgetMode::AddExpense;
    }

    fn move_selection(&mut self, down: bool) {
        let category = self.state.focus;
        let len = self
            .state
            .budget()
            .map_or(0, |budget| budget.expenses(category).len());
        let selected = &mut self.state.selected[category.index()];
        if len == 0 {
            *selected = 0;
        } else if down {
            *selected = (*selected + 1).min(len - 1);
        } else {
            *selected = selected.saturating_sub(1);
        }
    }

    fn remove_selected(&mut self) {
        let category = self.state.focus;
        let index = self.state.selected_in(category);
        let Some(budget) = self.state.session.state_mut() else {
            return;
        };
        let Some(removed) = budget.remove_expense(category, index) else {
            return;
        };
        let len = budget.expenses(category).len();
        self.state.selected[category.index()] = index.min(len.saturating_sub(1));
        self.toast(format!("Removed {}", removed.name), ToastLevel::Info);
    }

    fn handle_income_key(&mut self, action: AppAction) {
        match action {
            AppAction::Input(ch) => self.edit_income(|input| input.push(ch)),
            AppAction::Backspace => self.edit_income(|input| {
                input.pop();
            }),
            AppAction::Submit | AppAction::Cancel => self.state.mode = BudgetMode::Browse,
            _ => {}
        }
    }

    /// Edits the raw income text; every change re-derives the budgets.
    fn edit_income(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(budget) = self.state.session.state_mut() {
            let mut input = budget.income_input().to_string();
            edit(&mut input);
            budget.set_income(input);
        }
    }

    fn handle_form_key(&mut self, action: AppAction) {
        match action {
            AppAction::NextField | AppAction::Up | AppAction::Down => {
                self.state.form.next_field();
            }
            AppAction::Left => self.state.form.prev_category(),
            AppAction::Right => self.state.form.next_category(),
            AppAction::Backspace => self.state.form.pop(),
            AppAction::Input(ch) => self.state.form.push(ch),
            AppAction::Submit => self.submit_form(),
            AppAction::Cancel => {
                self.state.form = ExpenseForm::default();
                self.state.mode = BudgetMode::Browse;
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let form = &self.state.form;
        let category = form.category;
        let Some(budget) = self.state.session.state_mut() else {
            return;
        };
        // Incomplete entries are ignored and the form stays open.
        if !budget.add_expense(category, &form.name, &form.amount) {
            return;
        }

        let len = budget.expenses(category).len();
        let message = format!("Added {} to {}", form.name.trim(), category.label());
        self.state.focus = category;
        self.state.selected[category.index()] = len.saturating_sub(1);
        self.state.form = ExpenseForm::default();
        self.state.mode = BudgetMode::Browse;
        self.toast(message, ToastLevel::Success);
    }

    fn handle_paste_key(&mut self, action: AppAction) {
        match action {
            AppAction::Input(ch) => self.state.paste.push(ch),
            AppAction::Submit => self.state.paste.push('\n'),
            AppAction::NextField => self.state.paste.push('\t'),
            AppAction::Backspace => {
                self.state.paste.pop();
            }
            AppAction::Import => self.import_paste(),
            AppAction::Cancel => {
                self.state.paste.clear();
                self.state.mode = BudgetMode::Browse;
            }
            _ => {}
        }
    }

    fn import_paste(&mut self) {
        let text = std::mem::take(&mut self.state.paste);
        self.state.mode = BudgetMode::Browse;
        if text.trim().is_empty() {
            return;
        }

        let Some(budget) = self.state.session.state_mut() else {
            return;
        };
        let (batch, report) = import::parse_with_report(&text);
        budget.merge(batch);
        tracing::info!(
            imported = report.imported,
            skipped = report.skipped_count(),
            "bulk import merged"
        );

        match (report.imported, report.skipped_count()) {
            (0, _) => self.toast("Nothing imported", ToastLevel::Error),
            (rows, 0) => self.toast(format!("Imported {rows} rows"), ToastLevel::Success),
            (rows, skipped) => self.toast(
                format!("Imported {rows} rows, skipped {skipped}"),
                ToastLevel::Info,
            ),
        }
    }
}
