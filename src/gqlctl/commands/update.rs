use crate::client::{ControlPlane, SchemaClient};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Schema;
use tracing::info;

pub fn run<C: ControlPlane>(client: &C, schema: &Schema) -> Result<CmdResult> {
    let updated = client.schemas().update(schema)?;
    info!(name = %updated.name, "schema updated");
    Ok(CmdResult::default().with_affected_schemas(vec![updated]))
}
