use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    Result, ScreenflowError,
    model::{ComponentNode, Props},
};

/// One named screen: a root node tree plus its identity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScreenLayout {
    pub id: String,
    pub title: String,
    pub layout: ComponentNode,
}

/// Cross-cutting color palette applied by the client.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
}

/// Shared resources referenced by name from nodes.
///
/// This is a lookup table, not an ownership relation: nodes hold the
/// logical name, never the data.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataConfig {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub api_endpoints: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub static_data: Props,
}

/// The document root: one node tree plus document metadata.
///
/// `version` follows a comparable scheme so a consumer can refuse a
/// document whose major version it does not understand; the comparison
/// policy itself is the consumer's concern. The document is a snapshot:
/// constructed once, serialized, never patched afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScreen {
    pub version: String,
    pub screen: ScreenLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataConfig>,
}

impl ComponentScreen {
    pub fn from_json(s: &str) -> Result<Self> {
        let screen = serde_json::from_str::<ComponentScreen>(s);
        match screen {
            Ok(v) => Ok(v),
            Err(e) => Err(ScreenflowError::Screen(format!("{}", e))),
        }
    }

    /// Encode the document to compact JSON. Fails atomically: on error no
    /// partial output is produced.
    pub fn to_json(&self) -> Result<String> {
        let s = serde_json::to_string(self)?;
        Ok(s)
    }

    /// Encode the document to human-readable JSON.
    pub fn to_pretty_json(&self) -> Result<String> {
        let s = serde_json::to_string_pretty(self)?;
        Ok(s)
    }
}
