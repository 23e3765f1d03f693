//! Demo admin gate.
//!
//! This is NOT an authentication mechanism. It is a plain password
//! comparison preserved from the demo so the admin tab can be toggled, kept
//! behind this module boundary so nothing else grows session or credential
//! semantics on top of it. A real admin surface needs a proper redesign
//! (accounts, sessions, roles) before extending anything here.

use secrecy::{ExposeSecret, SecretString};

use crate::config::AdminConfig;

/// Gate for the demo admin panel: a single fixed expected password.
pub struct AdminGate {
    expected: SecretString,
}

impl AdminGate {
    /// Create a gate from configuration.
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            expected: config.password.clone(),
        }
    }

    /// Check a candidate password. Demo-only; not constant-time, not rate
    /// limited, no lockout.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        candidate == self.expected.expose_secret()
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("expected", &"[REDACTED]")
            .finish()
    }
}
