//! # gqlctl Architecture
//!
//! gqlctl administers the schemas held by a GraphQL gateway control plane. The
//! gateway does the real work (stitching, resolver execution, storage); this crate
//! only moves schema documents to and from it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, checks arity, renders YAML/JSON        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over the client       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Field validation, reading SDL files, one client call     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (client/)                                     │
//! │  - ControlPlane / SchemaClient traits                       │
//! │  - HttpClient (production), InMemoryClient (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`client`]: Control-plane client trait and implementations
//! - [`model`]: The `Schema` value
//! - [`config`]: Endpoint and timeout settings
//! - [`init`]: Config discovery and client construction
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
