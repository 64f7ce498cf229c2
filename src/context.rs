use std::collections::HashMap;
use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Error returned by a [`ValueProvider`]
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// Ambient, per-call context.
///
/// Carries arbitrary string attributes (tenant, session, request id, ...) that
/// fallback providers may read, and an optional timeout forwarded to the
/// transport for this call only.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    values: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl CallContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an attribute
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Set the timeout for calls made with this context
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Get an attribute
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

type ProviderFn = dyn Fn(&CallContext) -> Result<String, ProviderError> + Send + Sync;

/// Fallback source for a configuration value, invoked with the call context
#[derive(Clone)]
pub struct ValueProvider(Arc<ProviderFn>);

impl ValueProvider {
    /// Create a provider from a function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&CallContext) -> Result<String, ProviderError> + Send + Sync + 'static,
    {
        ValueProvider(Arc::new(f))
    }

    /// Provider that always yields `value`
    pub fn fixed(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(move |_| Ok(value.clone()))
    }

    /// Provider reading an environment variable on every call
    pub fn from_env(var: impl Into<String>) -> Self {
        let var = var.into();
        Self::new(move |_| {
            env::var(&var).map_err(|e| format!("environment variable {var}: {e}").into())
        })
    }

    /// Provider reading an attribute of the call context
    pub fn from_context(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(move |ctx| {
            ctx.value(&key)
                .map(str::to_string)
                .ok_or_else(|| format!("call context has no '{key}' value").into())
        })
    }

    /// Invoke the provider
    pub fn provide(&self, ctx: &CallContext) -> Result<String, ProviderError> {
        (self.0)(ctx)
    }
}

impl fmt::Debug for ValueProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueProvider(..)")
    }
}
