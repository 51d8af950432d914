use super::{ControlPlane, SchemaClient};
use crate::error::{GqlctlError, Result};
use crate::model::Schema;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// One call made against an [`InMemoryClient`], in the order received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCall {
    Get(String),
    List,
    Create(Schema),
    Update(Schema),
    Delete(String),
}

/// Map-backed control plane for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryClient {
    schemas: RefCell<BTreeMap<String, Schema>>,
    calls: RefCell<Vec<ClientCall>>,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(self, schema: Schema) -> Self {
        self.schemas
            .borrow_mut()
            .insert(schema.name.clone(), schema);
        self
    }

    /// Every call received so far
    pub fn calls(&self) -> Vec<ClientCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ClientCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl ControlPlane for InMemoryClient {
    type Schemas = Self;

    fn schemas(&self) -> &Self {
        self
    }
}

impl SchemaClient for InMemoryClient {
    fn get(&self, name: &str) -> Result<Schema> {
        self.record(ClientCall::Get(name.to_string()));
        self.schemas
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| GqlctlError::SchemaNotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<Schema>> {
        self.record(ClientCall::List);
        Ok(self.schemas.borrow().values().cloned().collect())
    }

    fn create(&self, schema: &Schema) -> Result<Schema> {
        self.record(ClientCall::Create(schema.clone()));
        let mut schemas = self.schemas.borrow_mut();
        if schemas.contains_key(&schema.name) {
            return Err(GqlctlError::Api {
                status: 409,
                message: format!("schema {} already exists", schema.name),
            });
        }
        schemas.insert(schema.name.clone(), schema.clone());
        Ok(schema.clone())
    }

    fn update(&self, schema: &Schema) -> Result<Schema> {
        self.record(ClientCall::Update(schema.clone()));
        let mut schemas = self.schemas.borrow_mut();
        match schemas.get_mut(&schema.name) {
            Some(existing) => {
                *existing = schema.clone();
                Ok(schema.clone())
            }
            None => Err(GqlctlError::SchemaNotFound(schema.name.clone())),
        }
    }

    fn delete(&self, name: &str) -> Result<()> {
        self.record(ClientCall::Delete(name.to_string()));
        if self.schemas.borrow_mut().remove(name).is_none() {
            return Err(GqlctlError::SchemaNotFound(name.to_string()));
        }
        Ok(())
    }
}
