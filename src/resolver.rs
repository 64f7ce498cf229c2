//! Per-call resolution of the base URI and auth token.
//!
//! A non-empty override on the request always wins. Otherwise the configured
//! provider is asked with the call context. With neither, or when the provider
//! yields an empty string, resolution fails with [`Error::MissingConfig`].
//! Both values are required: a request is never sent without a token.

use crate::context::{CallContext, ValueProvider};
use crate::error::{ConfigValue, Error, Result};
use std::fmt;

/// Per-call replacements for the configured providers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub base_uri: Option<String>,
    pub auth_token: Option<String>,
}

/// Builder helpers shared by every request type
pub trait WithOverrides: Sized {
    fn overrides_mut(&mut self) -> &mut Overrides;

    /// Use this base URI instead of the configured provider
    fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.overrides_mut().base_uri = Some(base_uri.into());
        self
    }

    /// Use this auth token instead of the configured provider
    fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.overrides_mut().auth_token = Some(auth_token.into());
        self
    }
}

/// Effective values for one call
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub base_uri: String,
    pub auth_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_uri", &self.base_uri)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Resolves credentials from overrides and the configured providers
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    base_uri: Option<ValueProvider>,
    auth_token: Option<ValueProvider>,
}

impl Resolver {
    /// Create a resolver from optional base URI and auth token providers
    pub fn new(base_uri: Option<ValueProvider>, auth_token: Option<ValueProvider>) -> Self {
        Resolver {
            base_uri,
            auth_token,
        }
    }

    /// Resolve both values, base URI first
    pub fn resolve(&self, ctx: &CallContext, overrides: &Overrides) -> Result<Credentials> {
        let base_uri = resolve_value(
            ConfigValue::BaseUri,
            overrides.base_uri.as_deref(),
            self.base_uri.as_ref(),
            ctx,
        )?;
        let auth_token = resolve_value(
            ConfigValue::AuthToken,
            overrides.auth_token.as_deref(),
            self.auth_token.as_ref(),
            ctx,
        )?;

        Ok(Credentials {
            base_uri,
            auth_token,
        })
    }
}

/// Resolve a single configuration value
pub fn resolve_value(
    value: ConfigValue,
    override_value: Option<&str>,
    provider: Option<&ValueProvider>,
    ctx: &CallContext,
) -> Result<String> {
    if let Some(v) = override_value.filter(|v| !v.is_empty()) {
        return Ok(v.to_string());
    }

    let provider = provider.ok_or(Error::MissingConfig(value))?;
    let resolved = provider
        .provide(ctx)
        .map_err(|source| Error::Provider { value, source })?;

    if resolved.is_empty() {
        return Err(Error::MissingConfig(value));
    }
    Ok(resolved)
}
