//! In-memory user details backing HTTP Basic authentication.
//!
//! Two accounts exist: a reader holding the `read` authority and an editor
//! holding `edit` plus the `ALLOW_EDIT` role. Passwords are kept only as
//! bcrypt hashes.

use crate::config::{Config, DEFAULT_PASSWORD};
use crate::domain::shared::principal::{Principal, ROLE_ALLOW_EDIT, ROLE_PREFIX};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct UserDetails {
    pub username: String,
    pub password_hash: String,
    pub authorities: Vec<String>,
}

impl UserDetails {
    pub fn builder(username: impl Into<String>) -> UserDetailsBuilder {
        UserDetailsBuilder {
            username: username.into(),
            password_hash: String::new(),
            authorities: Vec::new(),
            roles: Vec::new(),
        }
    }
}

pub struct UserDetailsBuilder {
    username: String,
    password_hash: String,
    authorities: Vec<String>,
    roles: Vec<String>,
}

impl UserDetailsBuilder {
    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = hash.into();
        self
    }

    pub fn authorities(mut self, authorities: &[&str]) -> Self {
        self.authorities = authorities.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Roles are stored as `ROLE_`-prefixed authorities.
    pub fn roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles
            .iter()
            .map(|r| format!("{}{}", ROLE_PREFIX, r))
            .collect();
        self
    }

    pub fn build(self) -> UserDetails {
        let mut authorities = self.authorities;
        authorities.extend(self.roles);
        UserDetails {
            username: self.username,
            password_hash: self.password_hash,
            authorities,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, UserDetails>,
}

impl InMemoryUserStore {
    pub fn new(users: impl IntoIterator<Item = UserDetails>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|u| (u.username.clone(), u))
                .collect(),
        }
    }

    /// Builds the reader and editor accounts from configuration, hashing
    /// [`DEFAULT_PASSWORD`] for any account without a configured hash.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails (e.g. an out-of-range `bcrypt_cost`).
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let hash_or_default = |configured: &Option<String>| -> anyhow::Result<String> {
            match configured {
                Some(hash) => Ok(hash.clone()),
                None => Ok(bcrypt::hash(DEFAULT_PASSWORD, config.bcrypt_cost)?),
            }
        };

        let user = UserDetails::builder(&config.auth_user_username)
            .password_hash(hash_or_default(&config.auth_user_password_hash)?)
            .authorities(&["read"])
            .build();
        let admin = UserDetails::builder(&config.auth_admin_username)
            .password_hash(hash_or_default(&config.auth_admin_password_hash)?)
            .authorities(&["edit"])
            .roles(&[ROLE_ALLOW_EDIT])
            .build();

        tracing::info!(
            users = 2,
            "In-memory user store ready ({}, {})",
            user.username,
            admin.username
        );
        Ok(Self::new([user, admin]))
    }

    pub fn find(&self, username: &str) -> Option<&UserDetails> {
        self.users.get(username)
    }

    /// Checks `password` against the stored hash for `username`.
    ///
    /// Verification runs on the blocking pool so request workers stay free.
    /// Returns `None` for unknown users, wrong passwords and malformed hashes.
    pub async fn authenticate(&self, username: &str, password: &str) -> Option<Principal> {
        let user = self.find(username)?;
        let hash = user.password_hash.clone();
        let candidate = password.to_string();

        match tokio::task::spawn_blocking(move || bcrypt::verify(candidate, &hash)).await {
            Ok(Ok(true)) => Some(Principal::new(&user.username, user.authorities.clone())),
            Ok(Ok(false)) => None,
            Ok(Err(e)) => {
                tracing::error!(user = %username, error = %e, "stored password hash is unusable");
                None
            }
            Err(e) => {
                tracing::error!(user = %username, error = %e, "password verification task failed");
                None
            }
        }
    }
}
