use crate::client::{ControlPlane, SchemaClient};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Schema;
use tracing::info;

/// Uploads a schema built by [`read_schema`](crate::commands::helpers::read_schema).
///
/// Callers validate and read the SDL file before a client exists, so this
/// only makes the single create call.
pub fn run<C: ControlPlane>(client: &C, schema: &Schema) -> Result<CmdResult> {
    let created = client.schemas().create(schema)?;
    info!(name = %created.name, "schema created");
    Ok(CmdResult::default().with_affected_schemas(vec![created]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::{ClientCall, InMemoryClient};
    use crate::commands::helpers::read_schema;
    use crate::error::GqlctlError;
    use std::fs;
    use tempfile::TempDir;

    fn write_sdl(dir: &TempDir, contents: &str) -> String {
        let path = dir.path().join("schema.graphql");
        fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn sends_exactly_one_create() {
        let temp = TempDir::new().unwrap();
        let file = write_sdl(&temp, "type Query { hello: String }");
        let client = InMemoryClient::new();

        let schema = read_schema("Foo", &file, "MyResolverMap").unwrap();
        let result = run(&client, &schema).unwrap();

        let expected = Schema::new("Foo", "type Query { hello: String }", "MyResolverMap");
        assert_eq!(client.calls(), vec![ClientCall::Create(expected.clone())]);
        assert_eq!(result.affected_schemas, vec![expected]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn remote_rejection_is_passed_through() {
        let temp = TempDir::new().unwrap();
        let file = write_sdl(&temp, "type Query { hello: String }");
        let client = InMemoryClient::new().with_schema(Schema::new("Foo", "", ""));

        let schema = read_schema("Foo", &file, "").unwrap();
        let err = run(&client, &schema).unwrap_err();
        assert!(matches!(err, GqlctlError::Api { status: 409, .. }));
    }
}
