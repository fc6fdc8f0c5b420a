//! # faxto - client for the fax.to REST API
//!
//! A blocking Rust client for sending faxes through fax.to. It builds
//! endpoint URLs with the account's API key, sends form and multipart
//! requests, and normalizes the service's JSON answers.
//!
//! ## Features
//!
//! - Account balance and per-document fax cost lookups
//! - Sending faxes from an uploaded document or a local file
//! - Job status and paged fax history
//! - Document storage: list, upload (local or remote), delete
//! - Typed errors separating validation, filesystem, transport and remote failures
//! - Injectable transport and file system for testing without network or disk
//!
//! ## Basic Usage
//!
//! ```no_run
//! use faxto::{FaxClient, FaxSendRequest};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FaxClient::new("your-api-key")?;
//!
//!     let balance = client.get_cash_balance()?;
//!     println!("Balance: {}", balance);
//!
//!     let response = client.send_fax(
//!         &FaxSendRequest::new("+49123456789").file("invoice.pdf"),
//!     )?;
//!     println!("Queued: {:?}", response.raw());
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every failure can be rendered in the `{"status": <message>}` shape:
//!
//! ```no_run
//! use faxto::FaxClient;
//!
//! let client = FaxClient::new("your-api-key")?;
//! match client.get_fax_status(0) {
//!     Ok(response) => println!("{:?}", response.status()),
//!     Err(e) => println!("{}", e.to_status_value()), // {"status":"missing required parameter job_id"}
//! }
//! # Ok::<(), faxto::FaxError>(())
//! ```

pub mod account;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod fax;
pub mod files;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use account::Account;
pub use client::Config;
pub use endpoint::{Endpoint, Mode};
pub use error::{ErrorKind, FaxError, Result};
pub use fax::FaxClient;
pub use files::{FileProbe, FileSystem, LocalFile, LocalFileSystem};
pub use request::{DocumentUpload, FaxSendRequest, HistoryQuery};
pub use response::Response;
pub use transport::{FormPart, HttpRequest, HttpResponse, RequestBody, ReqwestTransport, Transport};
pub use types::{FaxStatus, JobStatus};

pub use reqwest::Method;

// Re-export serde_json for convenience
pub use serde_json::json;
