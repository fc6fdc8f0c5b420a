use crate::account::Account;
use crate::client::Config;
use crate::error::{FaxError, Result};
use std::fmt;
use url::Url;

/// Remote operation a request targets, i.e. the path below the API base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `balance`
    Balance,
    /// `fax/{document_id}/costs`
    FaxCost { document_id: u64 },
    /// `fax/{job_id}/status`
    FaxStatus { job_id: u64 },
    /// `fax-history`
    FaxHistory,
    /// `fax`
    Fax,
    /// `files`
    Files,
    /// `files/{file_id}`
    File { file_id: u64 },
}

impl Mode {
    fn segments(&self) -> Vec<String> {
        match *self {
            Mode::Balance => vec!["balance".to_string()],
            Mode::FaxCost { document_id } => {
                vec!["fax".to_string(), document_id.to_string(), "costs".to_string()]
            }
            Mode::FaxStatus { job_id } => {
                vec!["fax".to_string(), job_id.to_string(), "status".to_string()]
            }
            Mode::FaxHistory => vec!["fax-history".to_string()],
            Mode::Fax => vec!["fax".to_string()],
            Mode::Files => vec!["files".to_string()],
            Mode::File { file_id } => vec!["files".to_string(), file_id.to_string()],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join("/"))
    }
}

/// Builds request URLs of the form `{base}/{mode}?api_key={key}[&query...]`.
///
/// The base URL is parsed once; every call derives a fresh URL from it, so
/// the key is appended exactly once per resolved URL.
#[derive(Clone)]
pub struct Endpoint {
    base: Url,
    api_key: String,
}

impl Endpoint {
    pub fn new(config: &Config, account: &Account) -> Result<Self> {
        let base = Url::parse(&config.base_url())?;
        if base.cannot_be_a_base() {
            return Err(FaxError::Config(format!(
                "{} cannot be used as an API base",
                base
            )));
        }

        Ok(Endpoint {
            base,
            api_key: account.api_key().to_string(),
        })
    }

    /// Resolve the URL for `mode` with no extra query parameters
    pub fn resolve(&self, mode: Mode) -> Url {
        self.resolve_with_query(mode, &[])
    }

    /// Resolve the URL for `mode`, appending `query` after the API key
    pub fn resolve_with_query(&self, mode: Mode, query: &[(&str, String)]) -> Url {
        let mut url = self.base.clone();

        // Checked in Endpoint::new
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(mode.segments());
        }

        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));

        url
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("base", &self.base.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}
