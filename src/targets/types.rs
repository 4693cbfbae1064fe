use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Target metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TargetInfo {
    pub key: String,
    pub title: String,
    pub extname: String,
    /// Key of the client used when none is requested
    pub default: String,
}

impl TargetInfo {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        extname: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            extname: extname.into(),
            default: default.into(),
        }
    }
}

/// Client metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientInfo {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ClientInfo {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            link: None,
            description: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One row of [`super::TargetRegistry::available_targets`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSummary {
    pub key: String,
    pub title: String,
    pub extname: String,
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<ClientInfo>>,
}

/// Options handed to a client generator.
///
/// `indent` is shared by every client; anything else is client specific and
/// read through [`GeneratorOptions::flag`] or [`GeneratorOptions::string`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeneratorOptions {
    #[serde(default = "default_indent")]
    pub indent: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Boolean switch; string values from environment overrides are accepted.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.extra.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            extra: Map::new(),
        }
    }
}

fn default_indent() -> String {
    "  ".to_string()
}
