use crate::config::GqlctlConfig;
use crate::model::Schema;

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Schemas changed by a mutating command
    pub affected_schemas: Vec<Schema>,
    /// Schemas fetched for display
    pub listed_schemas: Vec<Schema>,
    pub config: Option<GqlctlConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_schemas(mut self, schemas: Vec<Schema>) -> Self {
        self.affected_schemas = schemas;
        self
    }

    pub fn with_listed_schemas(mut self, schemas: Vec<Schema>) -> Self {
        self.listed_schemas = schemas;
        self
    }

    pub fn with_config(mut self, config: GqlctlConfig) -> Self {
        self.config = Some(config);
        self
    }
}
