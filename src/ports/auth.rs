/// The signed-in user as reported by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub uid: String,
    pub display_name: Option<String>,
}

impl UserIdentity {
    /// Name shown on submitted reviews when the account has none.
    pub fn display_name_or_anonymous(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Anonymous")
    }
}

/// Auth state owned by an external provider. Absence of a current user
/// gates booking and review submission.
pub trait AuthProvider: Send + Sync {
    fn current_user(&self) -> Option<UserIdentity>;
}
