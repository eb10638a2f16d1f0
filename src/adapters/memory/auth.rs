use std::sync::RwLock;

use crate::ports::auth::{AuthProvider, UserIdentity};

/// Auth provider with a settable current user. The real provider is an
/// external collaborator; this stands in for it in the demo and tests.
#[derive(Default)]
pub struct FixedAuth {
    user: RwLock<Option<UserIdentity>>,
}

impl FixedAuth {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(uid: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            user: RwLock::new(Some(UserIdentity {
                uid: uid.into(),
                display_name,
            })),
        }
    }

    pub fn sign_out(&self) {
        if let Ok(mut user) = self.user.write() {
            *user = None;
        }
    }
}

impl AuthProvider for FixedAuth {
    fn current_user(&self) -> Option<UserIdentity> {
        self.user.read().ok()?.clone()
    }
}
