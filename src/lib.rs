//! # businessobjects - Business Objects REST client for Rust
//!
//! A blocking client for the Business Objects models API: CRUD operations on
//! custom models and the entity types they contain.
//!
//! ## Features
//!
//! - One typed method per endpoint, taking a request value and returning a
//!   typed result
//! - Per-call base URI and auth token, with fallback providers configured on
//!   the client
//! - Structured errors: configuration, request construction, transport,
//!   remote (decoded service error body) and response decoding
//! - Pluggable [`Transport`]; the default one is a blocking reqwest client
//!
//! ## Basic Usage
//!
//! ```no_run
//! use businessobjects::{
//!     BusinessObjectsClient, CallContext, Config, GetCustomModelRequest, ValueProvider,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new()
//!         .with_base_uri_provider(ValueProvider::fixed("https://tenant.example.com"))
//!         .with_auth_token_provider(ValueProvider::from_env("BUSINESSOBJECTS_AUTH_TOKEN"));
//!     let client = BusinessObjectsClient::new(config)?;
//!
//!     let model = client.get_custom_model(
//!         &CallContext::new(),
//!         &GetCustomModelRequest::new("2cee33e2-6f7c-4a03-a1c2-e7e5433c5127"),
//!     )?;
//!
//!     println!("Model: {} ({})", model.name, model.state);
//!     Ok(())
//! }
//! ```
//!
//! ## Per-call overrides
//!
//! ```no_run
//! use businessobjects::{
//!     state, BusinessObjectsClient, CallContext, Config, CreateCustomModelRequest,
//!     NewCustomModel, WithOverrides,
//! };
//!
//! let client = BusinessObjectsClient::new(Config::new())?;
//!
//! let request = CreateCustomModelRequest::new(
//!     NewCustomModel::new("TestfromSDK")
//!         .with_state(state::INITIAL)
//!         .with_description("test description"),
//! )
//! .with_base_uri("https://tenant.example.com")
//! .with_auth_token("session-token");
//!
//! let id = client.create_custom_model(&CallContext::new(), &request)?;
//! println!("created {}", id);
//! # Ok::<(), businessobjects::Error>(())
//! ```

pub mod client;
pub mod context;
pub mod custom_models;
pub mod entity_types;
pub mod error;
pub mod models;
pub mod remote;
pub mod resolver;
pub mod rest;
pub mod transport;

// Re-export main types for convenience
pub use client::Config;
pub use context::{CallContext, ProviderError, ValueProvider};
pub use custom_models::{
    CreateCustomModelRequest, DeleteCustomModelRequest, GetCustomModelRequest,
    ListCustomModelsRequest, PatchCustomModelRequest, ReplaceCustomModelRequest,
};
pub use entity_types::{
    CreateEntityTypeRequest, DeleteEntityTypeRequest, GetEntityTypeRequest,
    ListEntityTypesRequest, PatchEntityTypeRequest, ReplaceEntityTypeRequest,
};
pub use error::{ConfigValue, Error, Result};
pub use models::{
    state, CustomModel, CustomModelPatch, EntityType, EntityTypePatch, Key, NewCustomModel,
    NewEntityType, NewKey, NewProperty, Property,
};
pub use remote::{ErrorDetail, InnerError, RemoteError};
pub use resolver::{Credentials, Overrides, Resolver, WithOverrides};
pub use rest::BusinessObjectsClient;
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError,
};
