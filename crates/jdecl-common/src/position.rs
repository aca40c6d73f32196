//! Source locations attached to declarations so diagnostics can point back
//! at the translated source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line/column location in a source file (both 1-based, 0 = unknown).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        SourceLocation {
            file: file.into(),
            line,
            column,
        }
    }

    /// Location that only knows the file.
    pub fn in_file(file: impl Into<String>) -> Self {
        Self::new(file, 0, 0)
    }

    pub fn is_unknown(&self) -> bool {
        self.file.is_empty() && self.line == 0
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("<unknown>");
        }
        let file = if self.file.is_empty() {
            "<unknown>"
        } else {
            self.file.as_str()
        };
        if self.line == 0 {
            write!(f, "{file}")
        } else if self.column == 0 {
            write!(f, "{file}:{}", self.line)
        } else {
            write!(f, "{file}:{}:{}", self.line, self.column)
        }
    }
}
