use faxto::{Account, Config, FaxClient, FaxError, HttpRequest, HttpResponse, Transport};
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "62c22bf0-0b39-11e7-92c9-c516d648dd0c";

/// What the mock answers with
#[derive(Clone)]
pub enum Reply {
    Body(u16, String),
    Fail(String),
}

/// Transport that records every request and answers with a canned reply
#[derive(Clone)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    reply: Reply,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn json(body: serde_json::Value) -> Self {
        Self::reply(Reply::Body(200, body.to_string()))
    }

    pub fn reply(reply: Reply) -> Self {
        MockTransport {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply,
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was dispatched")
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: HttpRequest) -> faxto::Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Body(status, body) => Ok(HttpResponse {
                status: *status,
                body: body.clone().into_bytes(),
            }),
            Reply::Fail(detail) => Err(FaxError::Transport(detail.clone())),
        }
    }
}

/// Client wired to `transport` and the real local file system
pub fn client_with(transport: &MockTransport) -> FaxClient {
    FaxClient::with_config(Account::new(API_KEY), Config::default())
        .expect("failed to build client")
        .with_transport(transport.clone())
}
