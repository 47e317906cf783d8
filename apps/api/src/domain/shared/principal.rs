pub const ROLE_PREFIX: &str = "ROLE_";
pub const ROLE_ALLOW_EDIT: &str = "ALLOW_EDIT";

/// An authenticated caller and the authorities granted to it.
///
/// Roles are stored as authorities carrying the `ROLE_` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub authorities: Vec<String>,
}

impl Principal {
    pub fn new(username: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            username: username.into(),
            authorities,
        }
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.has_authority(&format!("{}{}", ROLE_PREFIX, role))
    }
}
