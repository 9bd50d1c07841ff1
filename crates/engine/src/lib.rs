//! Core of the Limoneta 50/30/20 budget tracker.
//!
//! The engine is pure and session-local: a [`BudgetState`] holds the monthly
//! income and three ordered [`Buckets`] of [`ExpenseRecord`]s, every figure
//! shown to the user is derived from it on read, and the [`import`] module
//! turns pasted tab-delimited text into records to merge in.
//!
//! ```rust
//! use engine::{BudgetState, Category, Money};
//!
//! let mut state = BudgetState::new();
//! state.set_income("5000");
//! state.add_expense(Category::Needs, "Rent", "1200");
//! state.merge(engine::import::parse("wants\tDining Out\t$150.00\n"));
//!
//! let summary = state.summary();
//! assert_eq!(summary.category(Category::Needs).remaining, Money::from(1300));
//! assert_eq!(summary.category(Category::Wants).spent, Money::from(150));
//! ```

pub use advice::Advice;
pub use auth::{Authenticator, Credentials, SessionToken, StaticAuthenticator};
pub use budget::{BudgetState, BudgetStatus, BudgetSummary, CategorySummary, progress_percentage};
pub use category::Category;
pub use error::{AuthError, EngineError};
pub use expense::{Buckets, ExpenseRecord};
pub use import::{ImportReport, SkipReason, SkippedLine};
pub use money::Money;
pub use sample::sample_seed;
pub use session::Session;

pub mod import;

mod advice;
mod auth;
mod budget;
mod category;
mod error;
mod expense;
mod money;
mod sample;
mod session;

type ResultEngine<T> = Result<T, EngineError>;
