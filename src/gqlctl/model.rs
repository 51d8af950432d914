use serde::{Deserialize, Serialize};

/// A named GraphQL schema as stored by the control plane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub name: String,
    pub inline_schema: String,
    // Empty means the service generates a default resolver map
    #[serde(default)]
    pub resolver_map: String,
}

impl Schema {
    pub fn new(
        name: impl Into<String>,
        inline_schema: impl Into<String>,
        resolver_map: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            inline_schema: inline_schema.into(),
            resolver_map: resolver_map.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_uses_camel_case() {
        let schema = Schema::new("Foo", "type Query { hello: String }", "MyResolverMap");
        let json = serde_json::to_value(&schema).unwrap();

        assert_eq!(json["name"], "Foo");
        assert_eq!(json["inlineSchema"], "type Query { hello: String }");
        assert_eq!(json["resolverMap"], "MyResolverMap");
    }

    #[test]
    fn missing_resolver_map_decodes_as_empty() {
        let schema: Schema =
            serde_json::from_str(r#"{"name":"Foo","inlineSchema":"type Query { a: Int }"}"#)
                .unwrap();

        assert_eq!(schema.name, "Foo");
        assert_eq!(schema.resolver_map, "");
    }
}
