use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The set of characters accepted at one stencil position.
pub type CharSet = HashSet<char>;

/// One element of a stencil as written by the caller.
///
/// A literal expands to one position per character; a charset reference
/// expands to exactly one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StencilPosition {
    Literal(String),
    Charset(usize),
}

impl From<&str> for StencilPosition {
    fn from(s: &str) -> Self {
        StencilPosition::Literal(s.to_string())
    }
}

impl From<String> for StencilPosition {
    fn from(s: String) -> Self {
        StencilPosition::Literal(s)
    }
}

impl From<usize> for StencilPosition {
    fn from(index: usize) -> Self {
        StencilPosition::Charset(index)
    }
}

/// Caller-supplied stencil description.
///
/// ```json
/// { "stencil": ["id-", 0, 0, 0], "charsets": ["0123456789"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StencilOptions {
    pub stencil: Vec<StencilPosition>,
    #[serde(default)]
    pub charsets: Option<Vec<String>>,
}

impl StencilOptions {
    pub fn new(stencil: Vec<StencilPosition>, charsets: Option<Vec<String>>) -> Self {
        Self { stencil, charsets }
    }

    /// Parse options from a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse options from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Read and parse options from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Charsets as a slice; absent charsets behave as an empty table.
    pub fn charsets(&self) -> &[String] {
        self.charsets.as_deref().unwrap_or(&[])
    }
}
