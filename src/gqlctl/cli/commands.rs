use super::render::{print_messages, print_value, OutputFormat};
use super::setup::{Cli, Commands, SchemaCommands, UploadArgs};
use clap::Parser;
use gqlctl::api::{expect_args, read_schema, single_name, CmdResult, ConfigAction, GatewayApi};
use gqlctl::client::http::HttpClient;
use gqlctl::error::Result;
use gqlctl::init::{connect, load_config, resolve_config_dir};
use gqlctl::model::Schema;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    config_dir: PathBuf,
    endpoint: Option<String>,
    output: OutputFormat,
}

impl AppContext {
    /// Loads config and builds the client. Called only after arguments and files are checked.
    fn connect(&self) -> Result<GatewayApi<HttpClient>> {
        let config = load_config(&self.config_dir, self.endpoint.clone())?;
        connect(&config)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Schema(cmd) => match cmd {
            SchemaCommands::Get { args } => handle_get(&ctx, &args),
            SchemaCommands::List { args } => handle_list(&ctx, &args),
            SchemaCommands::Create(upload) => handle_create(&ctx, upload),
            SchemaCommands::Update(upload) => handle_update(&ctx, upload),
            SchemaCommands::Delete { args } => handle_delete(&ctx, &args),
        },
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "gqlctl=debug" } else { "gqlctl=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    Ok(AppContext {
        config_dir: resolve_config_dir()?,
        endpoint: cli.endpoint.clone(),
        output: cli.output,
    })
}

fn handle_get(ctx: &AppContext, args: &[String]) -> Result<()> {
    let name = single_name(args)?;
    let api = ctx.connect()?;
    let result = api.get_schema(name)?;
    for schema in &result.listed_schemas {
        print_value(schema, ctx.output)?;
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, args: &[String]) -> Result<()> {
    expect_args(args, 0)?;
    let api = ctx.connect()?;
    let result = api.list_schemas()?;
    if !result.listed_schemas.is_empty() {
        print_value(&result.listed_schemas, ctx.output)?;
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(ctx: &AppContext, upload: UploadArgs) -> Result<()> {
    let schema = read_upload(&upload)?;
    let api = ctx.connect()?;
    let result = api.create_schema(&schema)?;
    report_affected(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &AppContext, upload: UploadArgs) -> Result<()> {
    let schema = read_upload(&upload)?;
    let api = ctx.connect()?;
    let result = api.update_schema(&schema)?;
    report_affected(&result);
    print_messages(&result.messages);
    Ok(())
}

/// Arity, field checks and the file read, all before any config or client.
fn read_upload(upload: &UploadArgs) -> Result<Schema> {
    let name = single_name(upload.args.as_slice())?;
    read_schema(
        name,
        upload.from_file.as_deref().unwrap_or_default(),
        upload.resolver_map.as_deref().unwrap_or_default(),
    )
}

fn report_affected(result: &CmdResult) {
    for schema in &result.affected_schemas {
        debug!(
            name = %schema.name,
            resolver_map = %schema.resolver_map,
            bytes = schema.inline_schema.len(),
            "sent schema"
        );
    }
}

fn handle_delete(ctx: &AppContext, args: &[String]) -> Result<()> {
    let name = single_name(args)?;
    let api = ctx.connect()?;
    let result = api.delete_schema(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let is_show_all = matches!(action, ConfigAction::ShowAll);

    let result = gqlctl::api::config(&ctx.config_dir, action)?;
    if is_show_all {
        if let Some(config) = &result.config {
            print_value(config, ctx.output)?;
        }
    }
    print_messages(&result.messages);
    Ok(())
}
