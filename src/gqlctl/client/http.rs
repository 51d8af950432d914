use super::{ControlPlane, SchemaClient};
use crate::config::{parse_endpoint, GqlctlConfig};
use crate::error::{GqlctlError, Result};
use crate::model::Schema;
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub struct HttpClient {
    schemas: HttpSchemas,
}

impl HttpClient {
    /// Builds a client for the configured endpoint. No request is made here.
    pub fn new(config: &GqlctlConfig) -> Result<Self> {
        let base = parse_endpoint(&config.endpoint).map_err(GqlctlError::Connection)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("gqlctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GqlctlError::Connection(e.to_string()))?;

        debug!(endpoint = %base, "control plane client ready");
        Ok(Self {
            schemas: HttpSchemas { http, base },
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.schemas.base
    }
}

impl ControlPlane for HttpClient {
    type Schemas = HttpSchemas;

    fn schemas(&self) -> &HttpSchemas {
        &self.schemas
    }
}

pub struct HttpSchemas {
    http: Client,
    base: Url,
}

impl HttpSchemas {
    fn url(&self, name: Option<&str>) -> Result<Url> {
        // An empty segment would address the collection instead
        if name == Some("") {
            return Err(GqlctlError::Validation("schema name must be set".into()));
        }
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                GqlctlError::Connection(format!("endpoint {} cannot take a path", self.base))
            })?;
            segments.pop_if_empty().extend(["v1", "schemas"]);
            if let Some(name) = name {
                segments.push(name);
            }
        }
        Ok(url)
    }
}

/// Maps a response to the error taxonomy, leaving successes untouched.
fn check(resp: Response, name: Option<&str>) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND {
        if let Some(name) = name {
            return Err(GqlctlError::SchemaNotFound(name.to_string()));
        }
    }
    let message = match resp.text() {
        Ok(body) => body,
        Err(e) => {
            debug!(%status, error = %e, "could not read error body");
            String::new()
        }
    };
    Err(GqlctlError::Api {
        status: status.as_u16(),
        message,
    })
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let body = resp.text()?;
    Ok(serde_json::from_str(&body)?)
}

impl SchemaClient for HttpSchemas {
    fn get(&self, name: &str) -> Result<Schema> {
        let url = self.url(Some(name))?;
        debug!(%url, "GET schema");
        let resp = self.http.get(url).send()?;
        decode(check(resp, Some(name))?)
    }

    fn list(&self) -> Result<Vec<Schema>> {
        let url = self.url(None)?;
        debug!(%url, "GET schemas");
        let resp = self.http.get(url).send()?;
        decode(check(resp, None)?)
    }

    fn create(&self, schema: &Schema) -> Result<Schema> {
        let url = self.url(None)?;
        debug!(%url, name = %schema.name, "POST schema");
        let resp = self.http.post(url).json(schema).send()?;
        decode(check(resp, None)?)
    }

    fn update(&self, schema: &Schema) -> Result<Schema> {
        let url = self.url(Some(schema.name.as_str()))?;
        debug!(%url, "PUT schema");
        let resp = self.http.put(url).json(schema).send()?;
        decode(check(resp, Some(schema.name.as_str()))?)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let url = self.url(Some(name))?;
        debug!(%url, "DELETE schema");
        let resp = self.http.delete(url).send()?;
        check(resp, Some(name))?;
        Ok(())
    }
}
