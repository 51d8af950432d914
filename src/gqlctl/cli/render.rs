//! # Rendering
//!
//! Schemas and config are rendered as YAML by default (`-o json` for JSON).
//! Rendering is split from printing so the output can be tested as strings.

use clap::ValueEnum;
use colored::Colorize;
use gqlctl::api::{CmdMessage, MessageLevel};
use gqlctl::error::Result;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

pub(super) fn render_value<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(value)?;
            out.push('\n');
            Ok(out)
        }
    }
}

pub(super) fn print_value<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    print!("{}", render_value(value, format)?);
    Ok(())
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlctl::model::Schema;

    fn foo() -> Schema {
        Schema::new("Foo", "type Query { hello: String }", "MyResolverMap")
    }

    #[test]
    fn yaml_uses_wire_field_names() {
        let out = render_value(&foo(), OutputFormat::Yaml).unwrap();
        assert!(out.starts_with("name: Foo\ninlineSchema: "));
        assert!(out.ends_with("resolverMap: MyResolverMap\n"));
    }

    #[test]
    fn yaml_round_trips_multiline_sdl() {
        let schema = Schema::new("Foo", "type Query {\n  hello: String\n}\n", "");
        let out = render_value(&schema, OutputFormat::Yaml).unwrap();
        let back: Schema = serde_yaml::from_str(&out).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn json_is_pretty_with_trailing_newline() {
        let out = render_value(&[foo()], OutputFormat::Json).unwrap();
        assert!(out.starts_with("[\n"));
        assert!(out.ends_with("]\n"));
        assert!(out.contains("\"inlineSchema\": \"type Query { hello: String }\""));
    }
}
