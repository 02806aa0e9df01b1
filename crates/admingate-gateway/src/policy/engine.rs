use admingate_core::error::ClientCode;
use admingate_core::AllowList;
use axum::http::HeaderName;

/// Decision from policy evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    Pass,
    Reject { code: ClientCode, msg: &'static str },
}

/// Admin gate runtime.
/// Construct once at startup, then share via Arc.
#[derive(Debug)]
pub struct AdminPolicy {
    allow_list: AllowList,
    identity_header: HeaderName,
}

impl AdminPolicy {
    pub fn new(allow_list: AllowList, identity_header: HeaderName) -> Self {
        Self {
            allow_list,
            identity_header,
        }
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    pub fn identity_header(&self) -> &HeaderName {
        &self.identity_header
    }

    /// Decide whether the presented identity may reach the admin dashboard.
    ///
    /// A missing or empty identity is "not authenticated"; a present identity
    /// that is not on the list is "not allowed".
    pub fn check(&self, email: Option<&str>) -> PolicyDecision {
        let email = match email {
            Some(e) if !e.is_empty() => e,
            _ => {
                return PolicyDecision::Reject {
                    code: ClientCode::AuthFailed,
                    msg: "missing caller identity",
                }
            }
        };

        if !self.allow_list.is_admin(email) {
            return PolicyDecision::Reject {
                code: ClientCode::NotAllowed,
                msg: "caller is not an administrator",
            };
        }

        PolicyDecision::Pass
    }
}

