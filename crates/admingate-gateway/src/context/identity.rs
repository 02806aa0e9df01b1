use admingate_core::normalize_email;

/// Caller identity that passed the admin gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    /// Normalized (lowercase) email of the administrator.
    pub email: String,
}

impl AdminIdentity {
    pub fn new(raw_email: &str) -> Self {
        Self {
            email: normalize_email(raw_email),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
