use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{ActionConfig, ComponentNode, Props};

/// Data origin discriminator for list and grid nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, strum::Display)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "snake_case")]
pub enum DataSourceType {
    Api,
    Static,
    Database,
    #[strum(default)]
    Other(String),
}

impl std::str::FromStr for DataSourceType {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "api" => DataSourceType::Api,
            "static" => DataSourceType::Static,
            "database" => DataSourceType::Database,
            other => DataSourceType::Other(other.to_string()),
        })
    }
}

impl From<String> for DataSourceType {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(DataSourceType::Other(s))
    }
}

impl From<&str> for DataSourceType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<DataSourceType> for String {
    fn from(val: DataSourceType) -> Self {
        val.to_string()
    }
}

/// Query-parameter convention the client must use to fetch pages.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, strum::Display)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "snake_case")]
pub enum PaginationType {
    Offset,
    Cursor,
    Page,
    #[strum(default)]
    Other(String),
}

impl std::str::FromStr for PaginationType {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "offset" => PaginationType::Offset,
            "cursor" => PaginationType::Cursor,
            "page" => PaginationType::Page,
            other => PaginationType::Other(other.to_string()),
        })
    }
}

impl From<String> for PaginationType {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(PaginationType::Other(s))
    }
}

impl From<&str> for PaginationType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<PaginationType> for String {
    fn from(val: PaginationType) -> Self {
        val.to_string()
    }
}

/// How the client requests subsequent pages of an api source.
///
/// `page_size` is mandatory regardless of kind. The per-kind parameter
/// names (`offset_param`/`limit_param` for offset, `cursor_param` for
/// cursor, `page_param` for page) stay optional; an absent name means the
/// client applies its default. Names belonging to a different kind are
/// ignored by convention.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    #[serde(rename = "type")]
    pub kind: PaginationType,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_param: Option<String>,
}

impl PaginationConfig {
    pub fn new(
        kind: impl Into<PaginationType>,
        page_size: u32,
    ) -> Self {
        Self {
            kind: kind.into(),
            page_size,
            offset_param: None,
            limit_param: None,
            cursor_param: None,
            page_param: None,
        }
    }
}

/// Declaration of where list-bound data comes from.
///
/// The tag decides which payload fields are meaningful: `static` carries
/// literal `items`, `api` carries `url`/`method`/`headers`/`pagination`,
/// `database` carries nothing here. The struct stays flat so a mismatched
/// document is still representable; [`crate::validate`] reports the
/// mismatch instead of construction rejecting it. This layer never
/// performs a fetch, it only describes one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(rename = "type")]
    pub kind: DataSourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Props>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationConfig>,
}

impl DataSource {
    /// Create a source of the given kind with no payload fields set.
    pub fn new(kind: impl Into<DataSourceType>) -> Self {
        Self {
            kind: kind.into(),
            url: None,
            method: None,
            headers: HashMap::new(),
            items: Vec::new(),
            pagination: None,
        }
    }
}

/// Node layout repeated once per data element.
///
/// String values inside `layout` properties and `actions` may carry
/// `{{fieldName}}` placeholder tokens; substitution is performed by the
/// consumer at render time, never by this layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemTemplate {
    #[serde(rename = "type")]
    pub kind: String,
    pub layout: Box<ComponentNode>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub actions: HashMap<String, ActionConfig>,
}
