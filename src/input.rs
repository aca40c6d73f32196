//! JSON input describing the resolved types of one translation run.
//!
//! Either a bare array of types, or an object with embedded options:
//!
//! ```json
//! {
//!   "options": { "nullability": true },
//!   "types": [ { "kind": "class", "qualifiedName": "com.example.Point" } ]
//! }
//! ```

use anyhow::{Context, Result};
use jdecl_ast::TypeDecl;
use jdecl_common::DeclarationOptions;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationInput {
    /// Options embedded in the input; the CLI layers `--config` and flags on top.
    pub options: Option<DeclarationOptions>,
    pub types: Vec<TypeDecl>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Types(Vec<TypeDecl>),
    Full(TranslationInput),
}

impl TranslationInput {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let document: InputDocument =
            serde_json::from_str(text).context("input is neither a type array nor a translation object")?;
        Ok(match document {
            InputDocument::Types(types) => TranslationInput {
                options: None,
                types,
            },
            InputDocument::Full(input) => input,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input {}", path.display()))?;
        let input = Self::from_json_str(&text)
            .with_context(|| format!("failed to parse input {}", path.display()))?;
        tracing::debug!(path = %path.display(), types = input.types.len(), "loaded input");
        Ok(input)
    }
}
