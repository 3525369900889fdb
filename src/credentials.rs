use crate::constant::util::get_hidden_sensitive_string;
use crate::default_config;
use std::fmt::{Debug, Formatter};

/// TeamCity host and login, read once at startup.
///
/// Missing variables become empty strings. Requests are still issued and fail remotely.
#[derive(Clone, Default, PartialEq)]
pub struct Credentials {
    pub host: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup(default_config::ENV_HOST).unwrap_or_default(),
            username: lookup(default_config::ENV_LOGIN).unwrap_or_default(),
            password: lookup(default_config::ENV_PASSWORD).unwrap_or_default(),
        }
    }

    /// # base url
    ///
    /// `host` with `https://` prepended unless it already names a scheme.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("{}{}", default_config::DEFAULT_SCHEME, host)
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &get_hidden_sensitive_string(&self.password))
            .finish()
    }
}
