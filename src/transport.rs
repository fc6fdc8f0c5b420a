use crate::client::{create_fax_client, Config};
use crate::error::{FaxError, Result};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::Method;
use std::path::PathBuf;
use url::Url;

/// One field of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        path: PathBuf,
        file_name: String,
        mime: String,
    },
}

impl FormPart {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Request body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// `application/x-www-form-urlencoded` fields, in order
    Form(Vec<(String, String)>),
    Multipart(Vec<FormPart>),
}

impl RequestBody {
    /// Names of the fields carried by the body, in order
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            RequestBody::Empty => Vec::new(),
            RequestBody::Form(fields) => fields.iter().map(|(k, _)| k.as_str()).collect(),
            RequestBody::Multipart(parts) => parts.iter().map(FormPart::name).collect(),
        }
    }

    /// Text value of a field, if present
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Form(fields) => fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            RequestBody::Multipart(parts) => parts.iter().find_map(|part| match part {
                FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
                _ => None,
            }),
        }
    }
}

/// Fully built request, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        HttpRequest {
            method,
            url,
            body: RequestBody::Empty,
        }
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

/// Raw response as received from the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs HTTP requests on behalf of the client.
///
/// Implementations must be safe to share between threads; the client holds
/// a single instance for all calls.
pub trait Transport: Send + Sync {
    /// Send `request` and return the response, whatever its status code.
    /// Only connection-level failures are errors.
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Transport backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(ReqwestTransport {
            client: create_fax_client(config)?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        ReqwestTransport { client }
    }

    fn multipart(parts: Vec<FormPart>) -> Result<Form> {
        let mut form = Form::new();

        for part in parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File {
                    name,
                    path,
                    file_name,
                    mime,
                } => {
                    let file = Part::file(&path)
                        .map_err(|_| FaxError::Filesystem("file not readable".to_string()))?
                        .file_name(file_name)
                        .mime_str(&mime)?;
                    form.part(name, file)
                }
            };
        }

        Ok(form)
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.request(request.method, request.url);

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart(parts) => builder.multipart(Self::multipart(parts)?),
        };

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
