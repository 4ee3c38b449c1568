use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    Result, ScreenflowError,
    model::{ActionConfig, DataSource, ItemTemplate, ModifierConfig},
};

/// Open string-keyed JSON payload, used for component properties,
/// static data items and shared static data.
pub type Props = serde_json::Map<String, serde_json::Value>;

/// Component discriminator tag.
///
/// The set is open on both sides of the wire: tags this library does not
/// know are carried verbatim in [`ComponentType::Other`] and re-encode
/// unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, strum::Display)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "snake_case")]
pub enum ComponentType {
    Text,
    Button,
    Image,
    Column,
    ScrollableColumn,
    Row,
    Card,
    Spacer,
    TopAppBar,
    Grid,
    LazyColumn,
    LazyRow,
    LazyGrid,
    EnhancedLazyColumn,
    BarChart,
    LineChart,
    PieChart,
    RadarChart,
    #[strum(default)]
    Other(String),
}

impl std::str::FromStr for ComponentType {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "text" => ComponentType::Text,
            "button" => ComponentType::Button,
            "image" => ComponentType::Image,
            "column" => ComponentType::Column,
            "scrollable_column" => ComponentType::ScrollableColumn,
            "row" => ComponentType::Row,
            "card" => ComponentType::Card,
            "spacer" => ComponentType::Spacer,
            "top_app_bar" => ComponentType::TopAppBar,
            "grid" => ComponentType::Grid,
            "lazy_column" => ComponentType::LazyColumn,
            "lazy_row" => ComponentType::LazyRow,
            "lazy_grid" => ComponentType::LazyGrid,
            "enhanced_lazy_column" => ComponentType::EnhancedLazyColumn,
            "bar_chart" => ComponentType::BarChart,
            "line_chart" => ComponentType::LineChart,
            "pie_chart" => ComponentType::PieChart,
            "radar_chart" => ComponentType::RadarChart,
            other => ComponentType::Other(other.to_string()),
        })
    }
}

impl From<String> for ComponentType {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(ComponentType::Other(s))
    }
}

impl From<&str> for ComponentType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ComponentType> for String {
    fn from(val: ComponentType) -> Self {
        val.to_string()
    }
}

/// Placeholder spec rendered by the client before the first page of a
/// dynamic list resolves, e.g. a skeleton row count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoadingState {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// The universal building block of a screen.
///
/// A node is a tree: `children` is rendering order, and the tree recurses
/// through `empty_template`, `error_template` and `item_template.layout`
/// as well. All child links are owned values, so a node can never
/// transitively contain itself.
///
/// A node carrying a `data_source` must also carry an `item_template`;
/// the pairing is checked by [`crate::validate`], not by construction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub properties: Props,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<ModifierConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentNode>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub actions: HashMap<String, ActionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrangement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_template: Option<ItemTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading_template: Option<LoadingState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_template: Option<Box<ComponentNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_template: Option<Box<ComponentNode>>,
}

impl ComponentNode {
    /// Create a bare node of the given kind.
    pub fn new(kind: impl Into<ComponentType>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            properties: Props::new(),
            modifier: None,
            children: Vec::new(),
            actions: HashMap::new(),
            arrangement: None,
            columns: None,
            data_source: None,
            item_template: None,
            loading_template: None,
            empty_template: None,
            error_template: None,
        }
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let node = serde_json::from_str::<ComponentNode>(s);
        match node {
            Ok(v) => Ok(v),
            Err(e) => Err(ScreenflowError::Node(format!("{}", e))),
        }
    }
}
