use tracing::{info, warn};

/// Which screen the gate currently routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

/// Demo login gate: any non-empty email/password pair is accepted.
///
/// Once authenticated the gate stays open for the life of the process.
#[derive(Debug, Default)]
pub struct SessionGate {
    authenticated: bool,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempt_login(&mut self, email: &str, password: &str) -> bool {
        if email.is_empty() || password.is_empty() {
            warn!(
                email_present = !email.is_empty(),
                password_present = !password.is_empty(),
                "login rejected"
            );
            return false;
        }
        if !self.authenticated {
            info!(email, "session authenticated");
        }
        self.authenticated = true;
        true
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn screen(&self) -> Screen {
        if self.authenticated {
            Screen::Dashboard
        } else {
            Screen::Login
        }
    }
}
