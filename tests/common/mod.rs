#![allow(dead_code)]

use businessobjects::{
    BusinessObjectsClient, Config, HttpRequest, HttpResponse, Transport, TransportError,
    ValueProvider,
};
use std::sync::{Arc, Mutex};

pub const BASE_URI: &str = "https://bo.example.com";
pub const TOKEN: &str = "test-token";

/// Transport double that records every request and answers with a canned reply
pub struct StubTransport {
    reply: Result<HttpResponse, String>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn respond(status: u16, body: &str) -> Arc<Self> {
        Arc::new(StubTransport {
            reply: Ok(HttpResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn respond_json(status: u16, body: serde_json::Value) -> Arc<Self> {
        Self::respond(status, &body.to_string())
    }

    pub fn fail(message: &str) -> Arc<Self> {
        Arc::new(StubTransport {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The single request recorded so far
    pub fn last(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(message.clone().into()),
        }
    }
}

/// Client whose providers yield `BASE_URI` and `TOKEN`
pub fn configured_client(transport: Arc<StubTransport>) -> BusinessObjectsClient {
    let config = Config::new()
        .with_base_uri_provider(ValueProvider::fixed(BASE_URI))
        .with_auth_token_provider(ValueProvider::fixed(TOKEN));
    BusinessObjectsClient::with_transport(config, transport)
}

/// Client without any provider
pub fn bare_client(transport: Arc<StubTransport>) -> BusinessObjectsClient {
    BusinessObjectsClient::with_transport(Config::new(), transport)
}

pub fn json_body(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_slice(request.body.as_deref().expect("request has no body")).unwrap()
}
