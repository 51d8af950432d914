//! # CLI Behavior
//!
//! This is **one possible UI client** for gqlctl, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the `gqlctl` library.
//!
//! ## Command Tree
//!
//! ```text
//! gqlctl schema get NAME
//! gqlctl schema list
//! gqlctl schema create NAME --from-file PATH [--resolvermap NAME]
//! gqlctl schema update NAME --from-file PATH [--resolvermap NAME]
//! gqlctl schema delete NAME
//! gqlctl config [KEY [VALUE]]
//! ```
//!
//! Positional arity is checked here rather than by clap, so a wrong count is a
//! usage error reported as "requires exactly 1 argument" and no request is made.
//!
//! Mutating commands print nothing on success. Pass `--verbose` to see what was sent.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: YAML/JSON output and message printing
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
mod setup;

pub use commands::run;
