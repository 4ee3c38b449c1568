use serde::{Deserialize, Serialize};

use crate::model::Props;

/// One labeled value of a chart series, attached to chart nodes through
/// their `properties` payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartDataPoint {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub metadata: Props,
}

impl ChartDataPoint {
    pub fn new(
        label: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
            metadata: Props::new(),
        }
    }
}

/// A named sequence of data points, for multi-series charts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<ChartDataPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Presentation options for chart nodes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_labels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}
