use crate::client::{ControlPlane, SchemaClient};
use crate::commands::CmdResult;
use crate::error::Result;
use tracing::info;

pub fn run<C: ControlPlane>(client: &C, name: &str) -> Result<CmdResult> {
    client.schemas().delete(name)?;
    info!(name, "schema deleted");
    Ok(CmdResult::default())
}
