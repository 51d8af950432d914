use crate::client::{ControlPlane, SchemaClient};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run<C: ControlPlane>(client: &C) -> Result<CmdResult> {
    let schemas = client.schemas().list()?;
    let mut result = CmdResult::default();
    if schemas.is_empty() {
        result.add_message(CmdMessage::info("No schemas found."));
    }
    Ok(result.with_listed_schemas(schemas))
}
