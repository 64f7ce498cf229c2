//! Custom model operations.
//!
//! | Operation | Verb | Path |
//! |---|---|---|
//! | [`list_custom_models`](BusinessObjectsClient::list_custom_models) | GET | `/businessobjects/core/models/customModels` |
//! | [`get_custom_model`](BusinessObjectsClient::get_custom_model) | GET | `.../customModels(id)` |
//! | [`create_custom_model`](BusinessObjectsClient::create_custom_model) | POST | `.../customModels` |
//! | [`replace_custom_model`](BusinessObjectsClient::replace_custom_model) | PUT | `.../customModels(id)` |
//! | [`patch_custom_model`](BusinessObjectsClient::patch_custom_model) | PATCH | `.../customModels(id)` |
//! | [`delete_custom_model`](BusinessObjectsClient::delete_custom_model) | DELETE | `.../customModels(id)` |

use crate::context::CallContext;
use crate::error::Result;
use crate::models::{CustomModel, CustomModelPatch, NewCustomModel, ValueList};
use crate::resolver::{Overrides, WithOverrides};
use crate::rest::{require_id, BusinessObjectsClient, MODELS_ROOT};
use crate::transport::HttpMethod;

pub(crate) fn custom_models_path() -> String {
    format!("{MODELS_ROOT}/customModels")
}

/// Ids are percent-encoded so they cannot leave the parentheses
pub(crate) fn custom_model_path(model_id: &str) -> String {
    format!("{MODELS_ROOT}/customModels({})", urlencoding::encode(model_id))
}

#[derive(Debug, Clone, Default)]
pub struct ListCustomModelsRequest {
    pub overrides: Overrides,
}

impl ListCustomModelsRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetCustomModelRequest {
    pub model_id: String,
    pub overrides: Overrides,
}

impl GetCustomModelRequest {
    pub fn new(model_id: impl Into<String>) -> Self {
        GetCustomModelRequest {
            model_id: model_id.into(),
            overrides: Overrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateCustomModelRequest {
    pub model: NewCustomModel,
    pub overrides: Overrides,
}

impl CreateCustomModelRequest {
    pub fn new(model: NewCustomModel) -> Self {
        CreateCustomModelRequest {
            model,
            overrides: Overrides::default(),
        }
    }
}

/// Full replacement; the target is `model.id`
#[derive(Debug, Clone, Default)]
pub struct ReplaceCustomModelRequest {
    pub model: CustomModel,
    pub overrides: Overrides,
}

impl ReplaceCustomModelRequest {
    pub fn new(model: CustomModel) -> Self {
        ReplaceCustomModelRequest {
            model,
            overrides: Overrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchCustomModelRequest {
    pub model_id: String,
    pub patch: CustomModelPatch,
    pub overrides: Overrides,
}

impl PatchCustomModelRequest {
    pub fn new(model_id: impl Into<String>, patch: CustomModelPatch) -> Self {
        PatchCustomModelRequest {
            model_id: model_id.into(),
            patch,
            overrides: Overrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteCustomModelRequest {
    pub model_id: String,
    pub overrides: Overrides,
}

impl DeleteCustomModelRequest {
    pub fn new(model_id: impl Into<String>) -> Self {
        DeleteCustomModelRequest {
            model_id: model_id.into(),
            overrides: Overrides::default(),
        }
    }
}

impl WithOverrides for ListCustomModelsRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl WithOverrides for GetCustomModelRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl WithOverrides for CreateCustomModelRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl WithOverrides for ReplaceCustomModelRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl WithOverrides for PatchCustomModelRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl WithOverrides for DeleteCustomModelRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl BusinessObjectsClient {
    /// List all custom models visible to the caller
    pub fn list_custom_models(
        &self,
        ctx: &CallContext,
        request: &ListCustomModelsRequest,
    ) -> Result<Vec<CustomModel>> {
        let list: ValueList<CustomModel> = self.apply::<_, ()>(
            ctx,
            &request.overrides,
            HttpMethod::Get,
            &custom_models_path(),
            None,
        )?;
        Ok(list.items)
    }

    /// Fetch one custom model, including its entity types
    pub fn get_custom_model(
        &self,
        ctx: &CallContext,
        request: &GetCustomModelRequest,
    ) -> Result<CustomModel> {
        let model_id = require_id(&request.model_id, "model id")?;
        self.apply::<_, ()>(
            ctx,
            &request.overrides,
            HttpMethod::Get,
            &custom_model_path(model_id),
            None,
        )
    }

    /// Create a custom model and return the id assigned by the service
    pub fn create_custom_model(
        &self,
        ctx: &CallContext,
        request: &CreateCustomModelRequest,
    ) -> Result<String> {
        let created: CustomModel = self.apply(
            ctx,
            &request.overrides,
            HttpMethod::Post,
            &custom_models_path(),
            Some(&request.model),
        )?;
        Ok(created.id)
    }

    /// Replace a custom model with the given definition
    pub fn replace_custom_model(
        &self,
        ctx: &CallContext,
        request: &ReplaceCustomModelRequest,
    ) -> Result<()> {
        let model_id = require_id(&request.model.id, "model id")?;
        self.do_request(
            ctx,
            &request.overrides,
            HttpMethod::Put,
            &custom_model_path(model_id),
            Some(&request.model),
        )?;
        Ok(())
    }

    /// Update only the fields set in the patch
    pub fn patch_custom_model(
        &self,
        ctx: &CallContext,
        request: &PatchCustomModelRequest,
    ) -> Result<()> {
        let model_id = require_id(&request.model_id, "model id")?;
        self.do_request(
            ctx,
            &request.overrides,
            HttpMethod::Patch,
            &custom_model_path(model_id),
            Some(&request.patch),
        )?;
        Ok(())
    }

    pub fn delete_custom_model(
        &self,
        ctx: &CallContext,
        request: &DeleteCustomModelRequest,
    ) -> Result<()> {
        let model_id = require_id(&request.model_id, "model id")?;
        self.do_request::<()>(
            ctx,
            &request.overrides,
            HttpMethod::Delete,
            &custom_model_path(model_id),
            None,
        )?;
        Ok(())
    }
}
