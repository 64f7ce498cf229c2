//! Entity type operations.
//!
//! Entity types live under their owning custom model:
//! `/businessobjects/core/models/customModels(modelId)/entityTypes(entityId)`.

use crate::context::CallContext;
use crate::custom_models::custom_model_path;
use crate::error::Result;
use crate::models::{EntityType, EntityTypePatch, NewEntityType, ValueList};
use crate::resolver::{Overrides, WithOverrides};
use crate::rest::{require_id, BusinessObjectsClient};
use crate::transport::HttpMethod;

pub(crate) fn entity_types_path(model_id: &str) -> String {
    format!("{}/entityTypes", custom_model_path(model_id))
}

pub(crate) fn entity_type_path(model_id: &str, entity_id: &str) -> String {
    format!(
        "{}/entityTypes({})",
        custom_model_path(model_id),
        urlencoding::encode(entity_id)
    )
}

#[derive(Debug, Clone, Default)]
pub struct ListEntityTypesRequest {
    pub model_id: String,
    pub overrides: Overrides,
}

impl ListEntityTypesRequest {
    pub fn new(model_id: impl Into<String>) -> Self {
        ListEntityTypesRequest {
            model_id: model_id.into(),
            overrides: Overrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetEntityTypeRequest {
    pub model_id: String,
    pub entity_id: String,
    pub overrides: Overrides,
}

impl GetEntityTypeRequest {
    pub fn new(model_id: impl Into<String>, entity_id: impl Into<String>) -> Self {
        GetEntityTypeRequest {
            model_id: model_id.into(),
            entity_id: entity_id.into(),
            overrides: Overrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateEntityTypeRequest {
    pub model_id: String,
    pub entity_type: NewEntityType,
    pub overrides: Overrides,
}

impl CreateEntityTypeRequest {
    pub fn new(model_id: impl Into<String>, entity_type: NewEntityType) -> Self {
        CreateEntityTypeRequest {
            model_id: model_id.into(),
            entity_type,
            overrides: Overrides::default(),
        }
    }
}

/// Full replacement; the target is `entity_type.id`
#[derive(Debug, Clone, Default)]
pub struct ReplaceEntityTypeRequest {
    pub model_id: String,
    pub entity_type: EntityType,
    pub overrides: Overrides,
}

impl ReplaceEntityTypeRequest {
    pub fn new(model_id: impl Into<String>, entity_type: EntityType) -> Self {
        ReplaceEntityTypeRequest {
            model_id: model_id.into(),
            entity_type,
            overrides: Overrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchEntityTypeRequest {
    pub model_id: String,
    pub entity_id: String,
    pub patch: EntityTypePatch,
    pub overrides: Overrides,
}

impl PatchEntityTypeRequest {
    pub fn new(
        model_id: impl Into<String>,
        entity_id: impl Into<String>,
        patch: EntityTypePatch,
    ) -> Self {
        PatchEntityTypeRequest {
            model_id: model_id.into(),
            entity_id: entity_id.into(),
            patch,
            overrides: Overrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteEntityTypeRequest {
    pub model_id: String,
    pub entity_id: String,
    pub overrides: Overrides,
}

impl DeleteEntityTypeRequest {
    pub fn new(model_id: impl Into<String>, entity_id: impl Into<String>) -> Self {
        DeleteEntityTypeRequest {
            model_id: model_id.into(),
            entity_id: entity_id.into(),
            overrides: Overrides::default(),
        }
    }
}

impl WithOverrides for ListEntityTypesRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl WithOverrides for GetEntityTypeRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl WithOverrides for CreateEntityTypeRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl WithOverrides for ReplaceEntityTypeRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl WithOverrides for PatchEntityTypeRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl WithOverrides for DeleteEntityTypeRequest {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl BusinessObjectsClient {
    /// List the entity types of a custom model
    pub fn list_entity_types(
        &self,
        ctx: &CallContext,
        request: &ListEntityTypesRequest,
    ) -> Result<Vec<EntityType>> {
        let model_id = require_id(&request.model_id, "model id")?;
        let list: ValueList<EntityType> = self.apply::<_, ()>(
            ctx,
            &request.overrides,
            HttpMethod::Get,
            &entity_types_path(model_id),
            None,
        )?;
        Ok(list.items)
    }

    pub fn get_entity_type(
        &self,
        ctx: &CallContext,
        request: &GetEntityTypeRequest,
    ) -> Result<EntityType> {
        let model_id = require_id(&request.model_id, "model id")?;
        let entity_id = require_id(&request.entity_id, "entity id")?;
        self.apply::<_, ()>(
            ctx,
            &request.overrides,
            HttpMethod::Get,
            &entity_type_path(model_id, entity_id),
            None,
        )
    }

    /// Create an entity type and return the id assigned by the service
    pub fn create_entity_type(
        &self,
        ctx: &CallContext,
        request: &CreateEntityTypeRequest,
    ) -> Result<String> {
        let model_id = require_id(&request.model_id, "model id")?;
        let created: EntityType = self.apply(
            ctx,
            &request.overrides,
            HttpMethod::Post,
            &entity_types_path(model_id),
            Some(&request.entity_type),
        )?;
        Ok(created.id)
    }

    pub fn replace_entity_type(
        &self,
        ctx: &CallContext,
        request: &ReplaceEntityTypeRequest,
    ) -> Result<()> {
        let model_id = require_id(&request.model_id, "model id")?;
        let entity_id = require_id(&request.entity_type.id, "entity id")?;
        self.do_request(
            ctx,
            &request.overrides,
            HttpMethod::Put,
            &entity_type_path(model_id, entity_id),
            Some(&request.entity_type),
        )?;
        Ok(())
    }

    pub fn patch_entity_type(
        &self,
        ctx: &CallContext,
        request: &PatchEntityTypeRequest,
    ) -> Result<()> {
        let model_id = require_id(&request.model_id, "model id")?;
        let entity_id = require_id(&request.entity_id, "entity id")?;
        self.do_request(
            ctx,
            &request.overrides,
            HttpMethod::Patch,
            &entity_type_path(model_id, entity_id),
            Some(&request.patch),
        )?;
        Ok(())
    }

    pub fn delete_entity_type(
        &self,
        ctx: &CallContext,
        request: &DeleteEntityTypeRequest,
    ) -> Result<()> {
        let model_id = require_id(&request.model_id, "model id")?;
        let entity_id = require_id(&request.entity_id, "entity id")?;
        self.do_request::<()>(
            ctx,
            &request.overrides,
            HttpMethod::Delete,
            &entity_type_path(model_id, entity_id),
            None,
        )?;
        Ok(())
    }
}
