#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inline unique/index marker: `true` for a generated name, or an explicit name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case", untagged)]
pub enum StrOrBool {
    Str(String),
    Bool(bool),
}
