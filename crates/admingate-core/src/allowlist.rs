//! Admin allow-list compilation and matching.
//!
//! Entries are validated once at construction and stored lowercase. Lookups
//! lowercase the candidate and compare for exact equality; nothing else is
//! normalized (no trimming, no Unicode folding, no `+tag` stripping).

use crate::error::{AdminGateError, Result};

/// Immutable list of administrator email addresses.
///
/// Build once at startup, then share via `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: Vec<String>,
}

impl AllowList {
    /// Compile raw entries into an allow-list.
    ///
    /// Every entry must already be a lowercase email address. Duplicates are
    /// kept; membership is binary so they have no effect.
    pub fn new<I, S>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw = raw.into_iter();
        let mut entries = Vec::with_capacity(raw.size_hint().0);
        for s in raw {
            let s = s.into();
            validate_entry(&s)?;
            entries.push(s);
        }
        Ok(Self { entries })
    }

    /// Whether `email` belongs to the allow-list (case-insensitive).
    ///
    /// Never fails: empty or malformed input simply does not match.
    pub fn is_admin(&self, email: &str) -> bool {
        if email.is_empty() {
            return false;
        }
        let candidate = normalize_email(email);
        self.entries.iter().any(|e| *e == candidate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Normalization applied to a candidate before comparison: lowercase only.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

fn validate_entry(s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(AdminGateError::BadRequest("admin email must not be empty".into()));
    }
    if s.chars().any(char::is_whitespace) {
        return Err(AdminGateError::BadRequest(format!(
            "invalid admin email: {s:?} (contains whitespace)"
        )));
    }
    if s.to_lowercase() != s {
        return Err(AdminGateError::BadRequest(format!(
            "invalid admin email: {s} (must be lowercase)"
        )));
    }
    // format: "local@domain", exactly one '@'
    let (local, domain) = s.split_once('@').ok_or_else(|| {
        AdminGateError::BadRequest(format!("invalid admin email: {s} (expected local@domain)"))
    })?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(AdminGateError::BadRequest(format!(
            "invalid admin email: {s} (expected local@domain)"
        )));
    }
    Ok(())
}

