//! Placeholder token contract for item templates.
//!
//! String values inside an item template may carry tokens in the form
//! `{{fieldName}}`, where the field name may be a dotted path into the
//! bound data element (`{{user.name}}`). Substitution is performed by the
//! rendering client, never here; this module only defines the token
//! syntax and extracts tokens for inspection and validation.

use std::collections::BTreeSet;

use regex::Regex;
use serde_json::Value;

use crate::model::{ActionConfig, ComponentNode, ItemTemplate};

/// Regex pattern for placeholder tokens
/// Format: `{{fieldName}}` or `{{fieldName.subfield}}`
const PLACEHOLDER_PATTERN: &str = r"\{\{([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z0-9_]+)*)\}\}";

/// Extract the placeholder field names of one string, in order of
/// appearance. Repeated tokens are repeated in the output.
pub fn placeholders(text: &str) -> Vec<String> {
    let re = Regex::new(PLACEHOLDER_PATTERN).unwrap();
    re.captures_iter(text).map(|caps| caps[1].to_string()).collect()
}

/// Whether the string carries at least one placeholder token.
pub fn has_placeholders(text: &str) -> bool {
    let re = Regex::new(PLACEHOLDER_PATTERN).unwrap();
    re.is_match(text)
}

/// Collect every distinct placeholder of an item template: its layout
/// tree plus its per-item action bindings.
pub fn template_placeholders(template: &ItemTemplate) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    collect_node(&template.layout, &mut found);
    collect_actions(&template.actions, &mut found);
    found
}

/// Collect every distinct placeholder reachable from a node: property
/// values, action bindings, children and sub-templates.
pub fn node_placeholders(node: &ComponentNode) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    collect_node(node, &mut found);
    found
}

fn collect_node(
    node: &ComponentNode,
    found: &mut BTreeSet<String>,
) {
    for value in node.properties.values() {
        collect_value(value, found);
    }
    collect_actions(&node.actions, found);
    for child in &node.children {
        collect_node(child, found);
    }
    if let Some(template) = &node.item_template {
        collect_node(&template.layout, found);
        collect_actions(&template.actions, found);
    }
    if let Some(empty) = &node.empty_template {
        collect_node(empty, found);
    }
    if let Some(error) = &node.error_template {
        collect_node(error, found);
    }
}

fn collect_actions(
    actions: &std::collections::HashMap<String, ActionConfig>,
    found: &mut BTreeSet<String>,
) {
    for action in actions.values() {
        if let Some(destination) = &action.destination {
            found.extend(placeholders(destination));
        }
        for value in action.params.values() {
            found.extend(placeholders(value));
        }
    }
}

fn collect_value(
    value: &Value,
    found: &mut BTreeSet<String>,
) {
    match value {
        Value::String(s) => found.extend(placeholders(s)),
        Value::Array(arr) => {
            for v in arr {
                collect_value(v, found);
            }
        }
        Value::Object(obj) => {
            for v in obj.values() {
                collect_value(v, found);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{ActionType, ComponentType};

    // ==================== placeholders tests ====================

    #[test]
    fn test_placeholders_none() {
        assert!(placeholders("plain text").is_empty());
        assert!(!has_placeholders("plain text"));
    }

    #[test]
    fn test_placeholders_simple() {
        assert_eq!(placeholders("{{label}}"), vec!["label"]);
        assert!(has_placeholders("{{label}}"));
    }

    #[test]
    fn test_placeholders_embedded_in_text() {
        assert_eq!(placeholders("Hello {{name}}, you have {{count}} messages"), vec!["name", "count"]);
    }

    #[test]
    fn test_placeholders_dotted_path() {
        assert_eq!(placeholders("{{user.address.city}}"), vec!["user.address.city"]);
    }

    #[test]
    fn test_placeholders_repeated_token() {
        assert_eq!(placeholders("{{label}} / {{label}}"), vec!["label", "label"]);
    }

    #[test]
    fn test_placeholders_ignores_malformed_tokens() {
        assert!(placeholders("{label}").is_empty());
        assert!(placeholders("{{}}").is_empty());
        assert!(placeholders("{{9bad}}").is_empty());
    }

    // ==================== tree collection tests ====================

    #[test]
    fn test_node_placeholders_walks_tree_and_actions() {
        let mut title = ComponentNode::new(ComponentType::Text);
        title.properties.insert("text".to_string(), json!("{{title}}"));

        let mut row = ComponentNode::new(ComponentType::Row);
        row.children.push(title);
        row.actions.insert(
            "onClick".to_string(),
            crate::model::ActionConfig {
                kind: ActionType::Navigation,
                destination: Some("details/{{id}}".to_string()),
                params: std::collections::HashMap::from([("source".to_string(), "{{origin}}".to_string())]),
            },
        );

        let found = node_placeholders(&row);
        let expected: BTreeSet<String> = ["title", "id", "origin"].into_iter().map(String::from).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_node_placeholders_includes_sub_templates() {
        let mut empty = ComponentNode::new(ComponentType::Text);
        empty.properties.insert("text".to_string(), json!("{{emptyMessage}}"));

        let mut node = ComponentNode::new(ComponentType::LazyColumn);
        node.empty_template = Some(Box::new(empty));

        assert!(node_placeholders(&node).contains("emptyMessage"));
    }
}
