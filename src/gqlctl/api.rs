//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for gqlctl operations, whatever UI drives them.
//!
//! `GatewayApi<C: ControlPlane>` is generic over the client:
//! - Production: `GatewayApi<HttpClient>`
//! - Testing: `GatewayApi<InMemoryClient>`
//!
//! The facade dispatches and returns `Result<CmdResult>`. It does not print,
//! format, or decide exit codes.
//!
//! Uploads take a ready [`Schema`]: callers run [`read_schema`] first, so a bad
//! name or unreadable file is reported before any client is built.
//!
//! Configuration does not go through a `GatewayApi`: a broken endpoint must
//! still be fixable, so [`config`] needs no client.

use crate::client::ControlPlane;
use crate::commands;
use crate::error::Result;
use crate::model::Schema;
use std::path::Path;

pub struct GatewayApi<C: ControlPlane> {
    client: C,
}

impl<C: ControlPlane> GatewayApi<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn get_schema(&self, name: &str) -> Result<CmdResult> {
        commands::get::run(&self.client, name)
    }

    pub fn list_schemas(&self) -> Result<CmdResult> {
        commands::list::run(&self.client)
    }

    pub fn create_schema(&self, schema: &Schema) -> Result<CmdResult> {
        commands::create::run(&self.client, schema)
    }

    pub fn update_schema(&self, schema: &Schema) -> Result<CmdResult> {
        commands::update::run(&self.client, schema)
    }

    pub fn delete_schema(&self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&self.client, name)
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::helpers::{expect_args, read_schema, single_name};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::{ClientCall, InMemoryClient};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn dispatches_to_client() {
        let temp = TempDir::new().unwrap();
        let v1 = temp.path().join("v1.graphql");
        let v2 = temp.path().join("v2.graphql");
        fs::write(&v1, "type Query { v1: Int }").unwrap();
        fs::write(&v2, "type Query { v2: Int }").unwrap();

        let api = GatewayApi::new(InMemoryClient::new());
        api.create_schema(&read_schema("Foo", v1.to_str().unwrap(), "").unwrap())
            .unwrap();
        api.update_schema(&read_schema("Foo", v2.to_str().unwrap(), "Map").unwrap())
            .unwrap();
        let got = api.get_schema("Foo").unwrap();
        let listed = api.list_schemas().unwrap();
        api.delete_schema("Foo").unwrap();

        let expected = Schema::new("Foo", "type Query { v2: Int }", "Map");
        assert_eq!(got.listed_schemas, vec![expected.clone()]);
        assert_eq!(listed.listed_schemas, vec![expected.clone()]);
        assert_eq!(
            api.client().calls(),
            vec![
                ClientCall::Create(Schema::new("Foo", "type Query { v1: Int }", "")),
                ClientCall::Update(expected),
                ClientCall::Get("Foo".into()),
                ClientCall::List,
                ClientCall::Delete("Foo".into()),
            ]
        );
    }

    #[test]
    fn config_works_without_client() {
        let temp = TempDir::new().unwrap();
        let result = config(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().timeout_secs, 30);
    }
}
