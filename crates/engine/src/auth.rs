//! Credential gate in front of a budgeting session.
//!
//! The engine only needs to know whether a session may start; where the
//! credentials come from is up to the [`Authenticator`] implementation.

use uuid::Uuid;

use crate::{AuthError, EngineError, ResultEngine};

/// Username/password pair typed on the login screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Proof that a login succeeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken {
    id: Uuid,
    username: String,
}

impl SessionToken {
    pub fn issue(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Decides whether a set of credentials may open a session.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, AuthError>;
}

/// Accepts exactly one configured username/password pair.
#[derive(Clone, Debug)]
pub struct StaticAuthenticator {
    username: String,
    password: String,
}

impl StaticAuthenticator {
    /// Fails when either credential is blank, since no login could match it.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> ResultEngine<Self> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            return Err(EngineError::InvalidConfig("username must not be empty".to_string()));
        }
        if password.is_empty() {
            return Err(EngineError::InvalidConfig("password must not be empty".to_string()));
        }
        Ok(Self { username, password })
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, AuthError> {
        if credentials.username == self.username && credentials.password == self.password {
            Ok(SessionToken::issue(&credentials.username))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_configured_pair_only() {
        let auth = StaticAuthenticator::new("joeyang", "1234").unwrap();

        let token = auth
            .authenticate(&Credentials::new("joeyang", "1234"))
            .unwrap();
        assert_eq!(token.username(), "joeyang");

        let err = auth
            .authenticate(&Credentials::new("joeyang", "12345"))
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid username or password");

        assert!(auth.authenticate(&Credentials::new("JoeYang", "1234")).is_err());
        assert!(auth.authenticate(&Credentials::default()).is_err());
    }

    #[test]
    fn tokens_are_unique() {
        let a = SessionToken::issue("joe");
        let b = SessionToken::issue("joe");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn blank_configuration_is_rejected() {
        assert!(matches!(
            StaticAuthenticator::new(" ", "pw"),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            StaticAuthenticator::new("joe", ""),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
