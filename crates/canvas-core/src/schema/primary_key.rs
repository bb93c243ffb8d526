#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct PrimaryKeyDef {
    #[serde(default)]
    pub auto_increment: bool,
}

/// Inline primary key marker: `true` or `{ "auto_increment": true }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case", untagged)]
pub enum PrimaryKeySyntax {
    Bool(bool),
    Object(PrimaryKeyDef),
}

impl PrimaryKeySyntax {
    /// Whether the marker actually declares a primary key.
    pub fn is_declared(&self) -> bool {
        !matches!(self, PrimaryKeySyntax::Bool(false))
    }

    pub fn auto_increment(&self) -> bool {
        matches!(
            self,
            PrimaryKeySyntax::Object(PrimaryKeyDef {
                auto_increment: true
            })
        )
    }
}
