use crate::error::{FaxError, Result};

/// Environment variable read by [`Account::from_env`]
pub const API_KEY_ENV: &str = "FAXTO_API_KEY";

/// Account holds the fax.to API key used to authenticate every request.
#[derive(Clone)]
pub struct Account {
    api_key: String,
}

impl Account {
    /// Create a new Account from an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Account {
            api_key: api_key.into(),
        }
    }

    /// Create an Account from the `FAXTO_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Account::new(key.trim())),
            _ => Err(FaxError::Config(format!("{} is not set", API_KEY_ENV))),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Implement Debug manually to avoid exposing the key
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key() {
        let account = Account::new("62c22bf0-0b39-11e7-92c9-c516d648dd0c");
        let debug = format!("{:?}", account);
        assert!(!debug.contains("62c22bf0"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_api_key_accessor() {
        let account = Account::new(String::from("key-123"));
        assert_eq!(account.api_key(), "key-123");
    }
}
