//! # Client Layer
//!
//! This module defines the boundary between gqlctl and the remote control plane.
//! The [`ControlPlane`] trait hands out resource-scoped accessors; today that is
//! only [`ControlPlane::schemas`], whose methods are described by [`SchemaClient`].
//!
//! ## Implementations
//!
//! - [`http::HttpClient`]: Production client speaking JSON over HTTP
//!   - `GET/POST /v1/schemas`, `GET/PUT/DELETE /v1/schemas/{name}`
//!   - One blocking request per call, no retries
//!
//! - [`memory::InMemoryClient`]: Map-backed client for testing
//!   - Records every call so tests can assert what was sent
//!
//! Everything behind this trait (transport, retries, auth) belongs to the
//! remote service; callers only see `Result<Schema>`.

use crate::error::Result;
use crate::model::Schema;

pub mod http;
pub mod memory;

/// CRUD operations on the schemas of one control plane.
pub trait SchemaClient {
    /// Fetch a schema by name
    fn get(&self, name: &str) -> Result<Schema>;

    /// List every schema
    fn list(&self) -> Result<Vec<Schema>>;

    /// Create a schema; the remote decides what happens on a duplicate name
    fn create(&self, schema: &Schema) -> Result<Schema>;

    /// Replace an existing schema
    fn update(&self, schema: &Schema) -> Result<Schema>;

    /// Delete a schema by name
    fn delete(&self, name: &str) -> Result<()>;
}

/// A connection to a control plane.
pub trait ControlPlane {
    type Schemas: SchemaClient;

    fn schemas(&self) -> &Self::Schemas;
}
