//! Request identity resolution.
//!
//! Handlers never decide who is asking; they get the acting user from an
//! [`Identity`] implementation injected at startup.  Real session/auth
//! plugs in here without touching the store or aggregation code.

use tally_shared::UserId;

/// Fixed id of the single demo account.
pub const DEMO_USER_ID: &str = "demo-user";

/// Resolves the acting user for a request.
pub trait Identity: Send + Sync {
    fn current_user(&self) -> UserId;
}

/// Single hardcoded demo account, used until real auth exists.
pub struct DemoIdentity;

impl Identity for DemoIdentity {
    fn current_user(&self) -> UserId {
        UserId::from_raw(DEMO_USER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_identity_is_stable() {
        let identity = DemoIdentity;
        assert_eq!(identity.current_user(), identity.current_user());
        assert_eq!(identity.current_user().as_str(), "demo-user");
    }
}
