use crate::client::{ControlPlane, SchemaClient};
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run<C: ControlPlane>(client: &C, name: &str) -> Result<CmdResult> {
    let schema = client.schemas().get(name)?;
    Ok(CmdResult::default().with_listed_schemas(vec![schema]))
}
