use serde::{Deserialize, Serialize};

/// Layout and visual directives attached to a node.
///
/// Every field is optional; an absent field means "client default". A
/// present zero value (e.g. `width: 0`) is emitted as-is.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModifierConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_max_size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_max_width: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_end: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientConfig>,
}

/// Background gradient fill, e.g. `linear` or `radial`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradientConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_modifier_encodes_to_empty_object() {
        let value = serde_json::to_value(ModifierConfig::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_zero_width_is_emitted() {
        let modifier = ModifierConfig {
            width: Some(0),
            ..Default::default()
        };
        let value = serde_json::to_value(&modifier).unwrap();
        assert_eq!(value, json!({"width": 0}));
    }

    #[test]
    fn test_gradient_wire_names() {
        let gradient = GradientConfig {
            kind: "linear".to_string(),
            colors: vec!["#FF9F43".to_string(), "#3B82F6".to_string()],
            angle: Some(45.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&gradient).unwrap();
        assert_eq!(
            value,
            json!({"type": "linear", "colors": ["#FF9F43", "#3B82F6"], "angle": 45.0})
        );
    }
}
