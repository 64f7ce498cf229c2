use crate::client::Config;
use crate::context::CallContext;
use crate::error::{Error, Result};
use crate::remote::RemoteError;
use crate::resolver::{Credentials, Overrides, Resolver};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Root of every resource path
pub(crate) const MODELS_ROOT: &str = "/businessobjects/core/models";

/// Client for the Business Objects models API.
///
/// Holds only read-only configuration and the transport, so one instance can
/// serve concurrent calls from several threads.
#[derive(Clone)]
pub struct BusinessObjectsClient {
    resolver: Resolver,
    transport: Arc<dyn Transport>,
}

impl BusinessObjectsClient {
    /// Create a client using the default reqwest transport
    pub fn new(config: Config) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        BusinessObjectsClient {
            resolver: Resolver::new(config.base_uri_provider, config.auth_token_provider),
            transport,
        }
    }

    /// Execute a request and decode the JSON response body
    pub(crate) fn apply<T, B>(
        &self,
        ctx: &CallContext,
        overrides: &Overrides,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.do_request(ctx, overrides, method, path, body)?;
        serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
            status: response.status,
            source,
        })
    }

    /// Execute a request and return the raw response once its status is 2xx
    pub(crate) fn do_request<B>(
        &self,
        ctx: &CallContext,
        overrides: &Overrides,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        let credentials = self.resolver.resolve(ctx, overrides)?;
        let request = build_request(&credentials, method, path, body, ctx)?;
        let url = request.url.clone();

        let start = Instant::now();
        let response = self.transport.execute(request).map_err(|e| {
            tracing::debug!(%method, %url, error = %e, "business objects transport failure");
            Error::Transport(e)
        })?;

        tracing::debug!(
            %method,
            %url,
            status = response.status,
            elapsed = ?start.elapsed(),
            "business objects request"
        );

        if response.is_success() {
            return Ok(response);
        }

        tracing::warn!(%method, %url, status = response.status, "business objects request failed");
        Err(remote_failure(response))
    }
}

impl fmt::Debug for BusinessObjectsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusinessObjectsClient")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

/// Build the URL, headers and body of one exchange
pub(crate) fn build_request<B>(
    credentials: &Credentials,
    method: HttpMethod,
    path: &str,
    body: Option<&B>,
    ctx: &CallContext,
) -> Result<HttpRequest>
where
    B: Serialize + ?Sized,
{
    let raw_url = format!("{}{}", credentials.base_uri.trim_end_matches('/'), path);
    let url = Url::parse(&raw_url).map_err(|source| Error::InvalidUrl {
        url: raw_url.clone(),
        source,
    })?;

    let mut headers = vec![
        ("Accept".to_string(), "application/json".to_string()),
        (
            "Authorization".to_string(),
            format!("Bearer {}", credentials.auth_token),
        ),
    ];
    if method.is_mutation() {
        headers.push(("Origin".to_string(), credentials.base_uri.clone()));
    }

    let body = match body {
        Some(payload) => {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
            Some(serde_json::to_vec(payload).map_err(Error::Serialize)?)
        }
        None => None,
    };

    Ok(HttpRequest {
        method,
        url,
        headers,
        body,
        timeout: ctx.timeout(),
    })
}

/// Turn a non-2xx response into the matching error
fn remote_failure(response: HttpResponse) -> Error {
    match RemoteError::from_body(&response.body) {
        Ok(error) => Error::Remote {
            status: response.status,
            error,
        },
        Err(source) => Error::RemoteDecode {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
            source,
        },
    }
}

/// Fail early on an empty path identifier
pub(crate) fn require_id<'a>(id: &'a str, what: &'static str) -> Result<&'a str> {
    if id.is_empty() {
        return Err(Error::MissingId(what));
    }
    Ok(id)
}
