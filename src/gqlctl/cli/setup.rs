use super::render::OutputFormat;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gqlctl", bin_name = "gqlctl", version)]
#[command(about = "Manage schemas on a GraphQL gateway control plane", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Control-plane endpoint (overrides the config file)
    #[arg(long, global = true, env = "GQLCTL_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage GraphQL schemas
    #[command(subcommand)]
    Schema(SchemaCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (endpoint, timeout)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SchemaCommands {
    /// Return a schema by its name
    #[command(display_order = 1)]
    Get {
        #[arg(value_name = "NAME")]
        args: Vec<String>,
    },

    /// List all schemas
    #[command(alias = "ls", display_order = 2)]
    List {
        #[arg(hide = true)]
        args: Vec<String>,
    },

    /// Upload a schema from a local GraphQL schema file
    #[command(display_order = 3)]
    Create(UploadArgs),

    /// Replace a schema with the contents of a local GraphQL schema file
    #[command(display_order = 4)]
    Update(UploadArgs),

    /// Delete a schema by its name
    #[command(alias = "rm", display_order = 5)]
    Delete {
        #[arg(value_name = "NAME")]
        args: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    #[arg(value_name = "NAME")]
    pub args: Vec<String>,

    /// Path to a GraphQL schema file
    #[arg(short = 'f', long = "from-file", value_name = "PATH")]
    pub from_file: Option<String>,

    /// ResolverMap to connect to this schema; if none is given the gateway generates an empty one
    #[arg(short = 'r', long = "resolvermap", value_name = "NAME")]
    pub resolver_map: Option<String>,
}
