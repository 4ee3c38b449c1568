use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Interaction discriminator tag.
///
/// Unknown tags are not errors: a client that understands them renders
/// them, everyone else ignores them. They round-trip via
/// [`ActionType::Other`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, strum::Display)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "snake_case")]
pub enum ActionType {
    Navigation,
    ApiCall,
    #[strum(default)]
    Other(String),
}

impl std::str::FromStr for ActionType {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "navigation" => ActionType::Navigation,
            "api_call" => ActionType::ApiCall,
            other => ActionType::Other(other.to_string()),
        })
    }
}

impl From<String> for ActionType {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(ActionType::Other(s))
    }
}

impl From<&str> for ActionType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ActionType> for String {
    fn from(val: ActionType) -> Self {
        val.to_string()
    }
}

/// Interaction binding attached to a node under an interaction name such
/// as `onClick`. Destination and params may carry `{{field}}` placeholder
/// tokens when used inside an item template.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionConfig {
    #[serde(rename = "type")]
    pub kind: ActionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, String>,
}
