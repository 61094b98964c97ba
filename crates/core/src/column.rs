//! Column definitions.
//!
//! Columns are declared in the report definition and passed through for the
//! presentation layer's benefit; the execution core copies them but never
//! interprets them.

use serde::{Deserialize, Serialize};

/// One column of a report, as declared in its definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    /// Display label; rendering falls back to `name` when absent.
    #[serde(default)]
    pub label: Option<String>,
    /// Data-type hint for rendering (not validated here).
    #[serde(default)]
    pub format: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>) -> Self {
        ColumnDef {
            name: name.into(),
            label: None,
            format: None,
        }
    }

    /// Label to render, defaulting to the column name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
