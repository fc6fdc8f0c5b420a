use crate::account::Account;
use crate::client::Config;
use crate::endpoint::{Endpoint, Mode};
use crate::error::{FaxError, Result};
use crate::files::{FileProbe, FileSystem, LocalFile, LocalFileSystem};
use crate::request::{DocumentUpload, FaxSendRequest, HistoryQuery};
use crate::response::Response;
use crate::transport::{FormPart, HttpRequest, RequestBody, ReqwestTransport, Transport};
use reqwest::Method;
use std::sync::Arc;
use std::time::Instant;

/// Client for the fax.to API.
///
/// Every operation validates its arguments first and returns a
/// [`FaxError::Validation`] or [`FaxError::Filesystem`] without touching the
/// network when something required is missing. The client holds no mutable
/// state, so it can be cloned or shared between threads freely.
#[derive(Clone)]
pub struct FaxClient {
    /// Configuration
    pub config: Config,
    endpoint: Endpoint,
    transport: Arc<dyn Transport>,
    files: Arc<dyn FileSystem>,
}

impl FaxClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Account::new(api_key), Config::default())
    }

    /// Create a new client using the key from `FAXTO_API_KEY`
    pub fn from_env() -> Result<Self> {
        Self::with_config(Account::from_env()?, Config::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(account: Account, config: Config) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(FaxClient {
            endpoint: Endpoint::new(&config, &account)?,
            config,
            transport: Arc::new(transport),
            files: Arc::new(LocalFileSystem),
        })
    }

    /// Replace the transport used to send requests
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Replace the file system used to inspect local documents
    pub fn with_file_system(mut self, files: impl FileSystem + 'static) -> Self {
        self.files = Arc::new(files);
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Get the cash balance of the account
    pub fn get_cash_balance(&self) -> Result<f64> {
        let request = HttpRequest::new(Method::GET, self.endpoint.resolve(Mode::Balance));
        self.dispatch(request)?.into_amount("balance")
    }

    /// Get the cost of sending the uploaded document `document_id` to `fax_number`
    pub fn get_fax_cost(&self, fax_number: &str, document_id: u64) -> Result<f64> {
        if fax_number.is_empty() {
            return Err(reject("missing required parameter fax_number"));
        }
        if document_id == 0 {
            return Err(reject("missing required parameter document_id"));
        }

        let url = self.endpoint.resolve_with_query(
            Mode::FaxCost { document_id },
            &[("fax_number", fax_number.to_string())],
        );
        self.dispatch(HttpRequest::new(Method::GET, url))?
            .into_amount("balance")
    }

    /// Get the status of a fax job.
    ///
    /// Use [`Response::apply`] with [`crate::FaxStatus`] for a typed view.
    pub fn get_fax_status(&self, job_id: u64) -> Result<Response> {
        if job_id == 0 {
            return Err(reject("missing required parameter job_id"));
        }

        let url = self.endpoint.resolve(Mode::FaxStatus { job_id });
        self.dispatch(HttpRequest::new(Method::GET, url))
    }

    /// Get the fax history of the account, optionally paged
    pub fn get_fax_history(&self, query: HistoryQuery) -> Result<Response> {
        let url = self
            .endpoint
            .resolve_with_query(Mode::FaxHistory, &query.to_query());
        self.dispatch(HttpRequest::new(Method::GET, url))
    }

    /// Send a fax.
    ///
    /// A `"status": "executed"` answer means the job was queued; poll
    /// [`FaxClient::get_fax_status`] for the outcome.
    pub fn send_fax(&self, request: &FaxSendRequest) -> Result<Response> {
        if request.fax_number.is_empty() {
            return Err(reject("missing fax number"));
        }

        let body = match (request.local_file(), request.uploaded_document()) {
            (Some(path), _) => {
                let file = self.readable_file(path)?;
                let mut parts = vec![
                    FormPart::text("fax_number", request.fax_number.as_str()),
                    file_part("file", file),
                ];
                parts.extend(
                    optional_fields(request)
                        .into_iter()
                        .map(|(name, value)| FormPart::text(name, value)),
                );
                RequestBody::Multipart(parts)
            }
            (None, Some(document_id)) => {
                let mut fields = vec![
                    ("fax_number".to_string(), request.fax_number.clone()),
                    ("document_id".to_string(), document_id.to_string()),
                ];
                fields.extend(
                    optional_fields(request)
                        .into_iter()
                        .map(|(name, value)| (name.to_string(), value)),
                );
                RequestBody::Form(fields)
            }
            (None, None) => return Err(reject("missing document source")),
        };

        let request = HttpRequest::new(Method::POST, self.endpoint.resolve(Mode::Fax));
        self.dispatch(request.with_body(body))
    }

    /// List the documents uploaded to the account
    pub fn get_files(&self) -> Result<Response> {
        let request = HttpRequest::new(Method::GET, self.endpoint.resolve(Mode::Files));
        self.dispatch(request)
    }

    /// Upload a document to the account
    pub fn upload_file(&self, upload: &DocumentUpload) -> Result<Response> {
        if upload.file.is_empty() {
            return Err(reject("parameter file is missing"));
        }
        let file = self.readable_file(&upload.file)?;

        let body = RequestBody::Multipart(vec![file_part(upload.field_name(), file)]);
        let request = HttpRequest::new(Method::POST, self.endpoint.resolve(Mode::Files));
        self.dispatch(request.with_body(body))
    }

    /// Delete an uploaded document
    pub fn delete_file(&self, file_id: u64) -> Result<Response> {
        if file_id == 0 {
            return Err(reject("missing parameter file_id"));
        }

        let url = self.endpoint.resolve(Mode::File { file_id });
        self.dispatch(HttpRequest::new(Method::DELETE, url))
    }

    fn readable_file(&self, path: &str) -> Result<LocalFile> {
        match self.files.probe(path) {
            FileProbe::Readable(file) => Ok(file),
            FileProbe::Missing => Err(FaxError::Filesystem("file not found".to_string())),
            FileProbe::Unreadable => Err(FaxError::Filesystem("file not readable".to_string())),
        }
    }

    /// Send a built request and decode its body
    fn dispatch(&self, request: HttpRequest) -> Result<Response> {
        let method = request.method.clone();
        // The query carries the API key and is never logged
        let path = request.url.path().to_string();

        let start = Instant::now();
        let http_response = self.transport.execute(request).map_err(|e| {
            tracing::debug!(%method, %path, error = %e, "fax.to request failed");
            e
        })?;

        if self.config.debug {
            tracing::debug!(
                %method,
                %path,
                status = http_response.status,
                elapsed = ?start.elapsed(),
                "fax.to request"
            );
        }

        Response::from_slice(http_response.status, &http_response.body)
    }
}

impl std::fmt::Debug for FaxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaxClient")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

fn reject(message: &str) -> FaxError {
    tracing::debug!(reason = message, "request rejected before dispatch");
    FaxError::validation(message)
}

fn file_part(name: &str, file: LocalFile) -> FormPart {
    FormPart::File {
        name: name.to_string(),
        path: file.path,
        file_name: file.display_name,
        mime: file.mime,
    }
}

/// `tsi_number` and `delete_file`, only when the caller set them
fn optional_fields(request: &FaxSendRequest) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    if let Some(tsi) = request.tsi_number.as_deref().filter(|t| !t.is_empty()) {
        fields.push(("tsi_number", tsi.to_string()));
    }
    if let Some(delete) = request.delete_file {
        fields.push(("delete_file", if delete { "1" } else { "0" }.to_string()));
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FaxClient::new("K123").unwrap();
        assert_eq!(client.config.host, "fax.to");
        assert!(!format!("{:?}", client).contains("K123"));
    }

    #[test]
    fn test_client_with_config() {
        let config = Config::new("http".to_string(), "localhost:8080".to_string());
        let client = FaxClient::with_config(Account::new("K123"), config).unwrap();
        assert_eq!(
            client.endpoint().resolve(Mode::Balance).as_str(),
            "http://localhost:8080/api/v1/balance?api_key=K123"
        );
    }

    #[test]
    fn test_optional_fields() {
        let request = FaxSendRequest::new("1").tsi_number("ACME").delete_file(false);
        assert_eq!(
            optional_fields(&request),
            vec![("tsi_number", "ACME".to_string()), ("delete_file", "0".to_string())]
        );
        assert!(optional_fields(&FaxSendRequest::new("1")).is_empty());
    }
}
