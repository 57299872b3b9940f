use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Credential verification
// ---------------------------------------------------------------------------

/// Checks a username/password pair against some identity source.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A fixed in-memory credential table.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: BTreeMap<String, String>,
}

impl StaticCredentials {
    pub fn new(users: BTreeMap<String, String>) -> Self {
        Self { users }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| expected == password)
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Authentication state of one dashboard session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub username: String,
}

/// Gates the dashboard behind a credential check.
pub struct SessionGuard {
    verifier: Box<dyn CredentialVerifier>,
    session: Session,
}

impl SessionGuard {
    pub fn new(verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            verifier,
            session: Session::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    /// Signed-in user name, empty when signed out.
    pub fn username(&self) -> &str {
        &self.session.username
    }

    /// Try to sign in. A failed attempt leaves the session signed out.
    pub fn authenticate(&mut self, username: &str, password: &str) -> bool {
        if self.verifier.verify(username, password) {
            log::info!("User '{username}' signed in");
            self.session = Session {
                authenticated: true,
                username: username.to_string(),
            };
            true
        } else {
            log::warn!("Rejected sign-in for '{username}'");
            self.session = Session::default();
            false
        }
    }

    pub fn logout(&mut self) {
        if self.session.authenticated {
            log::info!("User '{}' signed out", self.session.username);
        }
        self.session = Session::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> SessionGuard {
        let users = BTreeMap::from([("admin".to_string(), "admin123".to_string())]);
        SessionGuard::new(Box::new(StaticCredentials::new(users)))
    }

    #[test]
    fn valid_credentials_authenticate() {
        let mut g = guard();
        assert!(!g.is_authenticated());
        assert!(g.authenticate("admin", "admin123"));
        assert!(g.is_authenticated());
        assert_eq!(g.username(), "admin");
    }

    #[test]
    fn wrong_password_or_user_is_rejected() {
        let mut g = guard();
        assert!(!g.authenticate("admin", "nope"));
        assert!(!g.authenticate("root", "admin123"));
        assert!(!g.is_authenticated());
        assert_eq!(g.username(), "");
    }

    #[test]
    fn logout_resets_session() {
        let mut g = guard();
        g.authenticate("admin", "admin123");
        g.logout();
        assert!(!g.is_authenticated());
        assert_eq!(g.username(), "");
    }

    #[test]
    fn sessions_are_isolated() {
        let mut a = guard();
        let b = guard();
        a.authenticate("admin", "admin123");
        assert!(a.is_authenticated());
        assert!(!b.is_authenticated());
    }

    struct AllowAll;

    impl CredentialVerifier for AllowAll {
        fn verify(&self, _: &str, _: &str) -> bool {
            true
        }
    }

    #[test]
    fn verifier_is_swappable() {
        let mut g = SessionGuard::new(Box::new(AllowAll));
        assert!(g.authenticate("anyone", "anything"));
    }
}
