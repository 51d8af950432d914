use crate::error::{GqlctlError, Result};
use crate::model::Schema;
use std::fs;

/// Checks positional arity, mirroring "requires exactly N argument(s)".
pub fn expect_args<S: AsRef<str>>(args: &[S], count: usize) -> Result<()> {
    if args.len() == count {
        return Ok(());
    }
    let noun = if count == 1 { "argument" } else { "arguments" };
    Err(GqlctlError::Usage(format!(
        "requires exactly {} {}",
        count, noun
    )))
}

/// Returns the single positional NAME argument, which must not be empty.
pub fn single_name<S: AsRef<str>>(args: &[S]) -> Result<&str> {
    expect_args(args, 1)?;
    let name = args[0].as_ref();
    if name.is_empty() {
        return Err(GqlctlError::Validation("schema name must be set".into()));
    }
    Ok(name)
}

/// Builds a schema from a local SDL file. Fields are checked before the file is touched.
pub fn read_schema(name: &str, filename: &str, resolver_map: &str) -> Result<Schema> {
    if name.is_empty() {
        return Err(GqlctlError::Validation("schema name must be set".into()));
    }
    if filename.is_empty() {
        return Err(GqlctlError::Validation("filename must be set".into()));
    }

    let inline_schema = fs::read_to_string(filename).map_err(|e| GqlctlError::io(filename, e))?;
    Ok(Schema::new(name, inline_schema, resolver_map))
}
