use crate::{AuthError, Authenticator, BudgetState, Credentials, SessionToken};

/// A single user's budgeting session.
///
/// The budget state is only reachable while a login is active; logging out
/// drops the token and wipes income and expenses.
#[derive(Debug)]
pub struct Session<A> {
    authenticator: A,
    token: Option<SessionToken>,
    state: BudgetState,
}

impl<A: Authenticator> Session<A> {
    pub fn new(authenticator: A) -> Self {
        Self {
            authenticator,
            token: None,
            state: BudgetState::default(),
        }
    }

    /// Checks `credentials` and opens a fresh session on success.
    ///
    /// A failed attempt leaves the current session untouched.
    pub fn login(&mut self, credentials: &Credentials) -> Result<&SessionToken, AuthError> {
        match self.authenticator.authenticate(credentials) {
            Ok(token) => {
                tracing::info!(username = token.username(), "session opened");
                self.state.reset();
                Ok(&*self.token.insert(token))
            }
            Err(err) => {
                tracing::warn!(username = credentials.username.as_str(), "login rejected");
                Err(err)
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// Ends the session and clears all budget data.
    pub fn logout(&mut self) {
        if let Some(token) = self.token.take() {
            tracing::info!(username = token.username(), "session closed");
        }
        self.state.reset();
    }

    pub fn state(&self) -> Option<&BudgetState> {
        self.is_active().then_some(&self.state)
    }

    pub fn state_mut(&mut self) -> Option<&mut BudgetState> {
        if self.is_active() {
            Some(&mut self.state)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, StaticAuthenticator};

    fn session() -> Session<StaticAuthenticator> {
        Session::new(StaticAuthenticator::new("joeyang", "1234").unwrap())
    }

    #[test]
    fn state_is_gated_by_login() {
        let mut session = session();
        assert!(!session.is_active());
        assert!(session.state().is_none());
        assert!(session.state_mut().is_none());

        let err = session
            .login(&Credentials::new("joeyang", "nope"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid username or password");
        assert!(!session.is_active());

        session.login(&Credentials::new("joeyang", "1234")).unwrap();
        assert!(session.is_active());
        assert!(session.state().is_some());
    }

    #[test]
    fn logout_clears_budget() {
        let mut session = session();
        session.login(&Credentials::new("joeyang", "1234")).unwrap();
        let state = session.state_mut().unwrap();
        state.set_income("5000");
        state.add_expense(Category::Needs, "Rent", "1200");

        session.logout();
        assert!(!session.is_active());

        session.login(&Credentials::new("joeyang", "1234")).unwrap();
        let state = session.state().unwrap();
        assert_eq!(state.income_input(), "");
        assert!(state.buckets().is_empty());
    }

    #[test]
    fn failed_login_keeps_active_session() {
        let mut session = session();
        session.login(&Credentials::new("joeyang", "1234")).unwrap();
        session.state_mut().unwrap().set_income("100");

        assert!(session.login(&Credentials::new("x", "y")).is_err());
        assert!(session.is_active());
        assert_eq!(session.state().unwrap().income_input(), "100");
    }
}
