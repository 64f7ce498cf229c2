//! Wire types of the Business Objects models API.
//!
//! Read types decode every field leniently: anything the service leaves out
//! falls back to its default. Creation and patch payloads omit empty or unset
//! fields so the service keeps control of ids and defaults.

use serde::{Deserialize, Serialize};

/// Lifecycle labels reported by the service.
///
/// State fields stay plain strings; these are the values observed in practice.
pub mod state {
    pub const INITIAL: &str = "initial";
    pub const STAGED: &str = "staged";
    pub const PUBLISHED: &str = "published";
}

/// Collection wrapper used by list endpoints
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ValueList<T> {
    #[serde(rename = "value", default)]
    pub items: Vec<T>,
}

/// A custom model and its entity types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomModel {
    /// Assigned by the service; empty until created
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub state: String,
    pub description: String,
    pub entity_types: Vec<EntityType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityType {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub plural_name: String,
    pub description: String,
    pub state: String,
    pub key: Key,
    pub properties: Vec<Property>,
}

/// Identifying field of an entity type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Key {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub required: bool,
    pub indexed: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub state: String,
}

/// Payload for creating a custom model, optionally with its entity types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomModel {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entity_types: Vec<NewEntityType>,
}

impl NewCustomModel {
    pub fn new(name: impl Into<String>) -> Self {
        NewCustomModel {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Add an entity type created together with the model
    pub fn with_entity_type(mut self, entity_type: NewEntityType) -> Self {
        self.entity_types.push(entity_type);
        self
    }
}

/// Payload for creating an entity type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntityType {
    pub name: String,
    pub plural_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    pub key: NewKey,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<NewProperty>,
}

impl NewEntityType {
    pub fn new(name: impl Into<String>, plural_name: impl Into<String>, key: NewKey) -> Self {
        NewEntityType {
            name: name.into(),
            plural_name: plural_name.into(),
            key,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_property(mut self, property: NewProperty) -> Self {
        self.properties.push(property);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewKey {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NewKey {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        NewKey {
            name: name.into(),
            description: String::new(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewProperty {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
    pub indexed: bool,
}

impl NewProperty {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        NewProperty {
            name: name.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn indexed(mut self, indexed: bool) -> Self {
        self.indexed = indexed;
        self
    }
}

/// Partial update of a custom model; unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomModelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Partial update of an entity type; unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
}
