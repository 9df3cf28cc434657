//! Design-token export: flat JSON keyed `<collection>/<variable>` plus a
//! mirrored `:root` block of CSS custom properties.

use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum TokenExportError {
    #[error("failed to read or write tokens: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid token JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token '{0}' is defined more than once")]
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableCollection {
    pub name: String,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub value: Value,
}

/// Variables document as pulled from the design tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariablesDocument {
    pub collections: Vec<VariableCollection>,
}

impl VariablesDocument {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TokenExportError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenExport {
    tokens: BTreeMap<String, Value>,
}

impl TokenExport {
    /// Keys must stay distinct after kebab-casing, since each one becomes a
    /// CSS custom property.
    pub fn from_collections(collections: &[VariableCollection]) -> Result<Self, TokenExportError> {
        let mut tokens = BTreeMap::new();
        let mut properties = HashSet::new();
        for collection in collections {
            for variable in &collection.variables {
                let key = format!("{}/{}", collection.name, variable.name);
                if !properties.insert(kebab_case(&key))
                    || tokens.insert(key.clone(), variable.value.clone()).is_some()
                {
                    return Err(TokenExportError::Duplicate(key));
                }
            }
        }
        Ok(Self { tokens })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.tokens.get(key)
    }

    pub fn to_json(&self) -> Result<String, TokenExportError> {
        Ok(serde_json::to_string_pretty(&self.tokens)?)
    }

    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (key, value) in &self.tokens {
            css.push_str(&format!("  --{}: {};\n", kebab_case(key), css_value(value)));
        }
        css.push_str("}\n");
        css
    }

    pub fn write_files(&self, json_out: &Path, css_out: &Path) -> Result<(), TokenExportError> {
        std::fs::write(json_out, self.to_json()?)?;
        std::fs::write(css_out, self.to_css())?;
        info!(
            tokens = self.len(),
            json = %json_out.display(),
            css = %css_out.display(),
            "design tokens exported"
        );
        Ok(())
    }
}

fn css_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Lowercase, hyphen-separated form of a token path.
///
/// Separators (`/`, whitespace, `_`, `.`) and lower-to-upper camel boundaries
/// become single hyphens.
pub fn kebab_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut after_lower = false;
    for c in raw.chars() {
        if c.is_alphanumeric() {
            if c.is_uppercase() && after_lower {
                out.push('-');
            }
            out.extend(c.to_lowercase());
            after_lower = c.is_lowercase() || c.is_numeric();
        } else {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            after_lower = false;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
