//! Ready-made constructors for the common component shapes, actions,
//! modifiers and data sources.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::{
    builder::ComponentBuilder,
    model::{
        ActionConfig, ActionType, ChartDataPoint, ChartSeries, ComponentNode, ComponentType, DataSource, DataSourceType, ItemTemplate, ModifierConfig,
        PaginationConfig, PaginationType, Props,
    },
};

fn payload<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

// ==================== basic components ====================

pub fn text(text: impl Into<String>) -> ComponentNode {
    ComponentBuilder::new(ComponentType::Text).with_property("text", text.into()).build()
}

pub fn styled_text(
    text: impl Into<String>,
    style: impl Into<String>,
) -> ComponentNode {
    ComponentBuilder::new(ComponentType::Text)
        .with_property("text", text.into())
        .with_property("style", style.into())
        .build()
}

pub fn button(
    text: impl Into<String>,
    on_click: ActionConfig,
) -> ComponentNode {
    ComponentBuilder::new(ComponentType::Button)
        .with_property("text", text.into())
        .with_action("onClick", on_click)
        .build()
}

pub fn image(url: impl Into<String>) -> ComponentNode {
    ComponentBuilder::new(ComponentType::Image).with_property("url", url.into()).build()
}

pub fn circle_image(
    url: impl Into<String>,
    size: u32,
) -> ComponentNode {
    ComponentBuilder::new(ComponentType::Image)
        .with_property("url", url.into())
        .with_property("shape", "circle")
        .with_property("size", size)
        .build()
}

pub fn spacer(height: u32) -> ComponentNode {
    ComponentBuilder::new(ComponentType::Spacer).with_property("height", height).build()
}

pub fn top_app_bar(title: impl Into<String>) -> ComponentNode {
    ComponentBuilder::new(ComponentType::TopAppBar).with_property("title", title.into()).build()
}

pub fn centered_top_app_bar(title: impl Into<String>) -> ComponentNode {
    ComponentBuilder::new(ComponentType::TopAppBar)
        .with_property("title", title.into())
        .with_property("centerTitle", true)
        .build()
}

// ==================== containers ====================

pub fn column(children: impl IntoIterator<Item = ComponentNode>) -> ComponentNode {
    ComponentBuilder::new(ComponentType::Column).with_children(children).build()
}

pub fn scrollable_column(children: impl IntoIterator<Item = ComponentNode>) -> ComponentNode {
    ComponentBuilder::new(ComponentType::ScrollableColumn).with_children(children).build()
}

pub fn row(children: impl IntoIterator<Item = ComponentNode>) -> ComponentNode {
    ComponentBuilder::new(ComponentType::Row).with_children(children).build()
}

pub fn card(children: impl IntoIterator<Item = ComponentNode>) -> ComponentNode {
    ComponentBuilder::new(ComponentType::Card).with_children(children).build()
}

pub fn card_with_elevation(
    elevation: f32,
    children: impl IntoIterator<Item = ComponentNode>,
) -> ComponentNode {
    ComponentBuilder::new(ComponentType::Card)
        .with_property("elevation", elevation)
        .with_children(children)
        .build()
}

// ==================== charts ====================

pub fn bar_chart(
    title: impl Into<String>,
    data: Vec<ChartDataPoint>,
) -> ComponentNode {
    ComponentBuilder::new(ComponentType::BarChart)
        .with_property("title", title.into())
        .with_property("data", payload(data))
        .with_property("showLegend", true)
        .with_property("showGrid", true)
        .with_property("showValues", true)
        .build()
}

pub fn line_chart(
    title: impl Into<String>,
    series: Vec<ChartSeries>,
) -> ComponentNode {
    ComponentBuilder::new(ComponentType::LineChart)
        .with_property("title", title.into())
        .with_property("series", payload(series))
        .with_property("showLegend", true)
        .with_property("showGrid", true)
        .build()
}

pub fn pie_chart(
    title: impl Into<String>,
    data: Vec<ChartDataPoint>,
) -> ComponentNode {
    ComponentBuilder::new(ComponentType::PieChart)
        .with_property("title", title.into())
        .with_property("data", payload(data))
        .with_property("showLegend", true)
        .with_property("showValues", true)
        .build()
}

pub fn radar_chart(
    title: impl Into<String>,
    data: Vec<ChartDataPoint>,
) -> ComponentNode {
    ComponentBuilder::new(ComponentType::RadarChart)
        .with_property("title", title.into())
        .with_property("data", payload(data))
        .with_property("showLabels", true)
        .build()
}

// ==================== dynamic lists ====================

pub fn lazy_column(
    data_source: DataSource,
    item_template: ItemTemplate,
) -> ComponentNode {
    ComponentBuilder::new(ComponentType::LazyColumn)
        .with_data_source(data_source)
        .with_item_template(item_template)
        .build()
}

pub fn lazy_row(
    data_source: DataSource,
    item_template: ItemTemplate,
) -> ComponentNode {
    ComponentBuilder::new(ComponentType::LazyRow)
        .with_data_source(data_source)
        .with_item_template(item_template)
        .build()
}

/// Lazy column whose static items may each override the rendered
/// component, see [`item_with_template`] and [`item_with_component_type`].
pub fn enhanced_lazy_column(
    data_source: DataSource,
    item_template: ItemTemplate,
) -> ComponentNode {
    ComponentBuilder::new(ComponentType::EnhancedLazyColumn)
        .with_data_source(data_source)
        .with_item_template(item_template)
        .build()
}

// ==================== data sources ====================

pub fn static_data_source(items: Vec<Props>) -> DataSource {
    let mut source = DataSource::new(DataSourceType::Static);
    source.items = items;
    source
}

pub fn api_data_source(
    url: impl Into<String>,
    method: impl Into<String>,
) -> DataSource {
    let mut source = DataSource::new(DataSourceType::Api);
    source.url = Some(url.into());
    source.method = Some(method.into());
    source
}

pub fn api_data_source_with_pagination(
    url: impl Into<String>,
    method: impl Into<String>,
    page_size: u32,
) -> DataSource {
    let mut source = api_data_source(url, method);
    source.pagination = Some(PaginationConfig::new(PaginationType::Page, page_size));
    source
}

// ==================== actions ====================

pub fn navigation_action(destination: impl Into<String>) -> ActionConfig {
    ActionConfig {
        kind: ActionType::Navigation,
        destination: Some(destination.into()),
        params: HashMap::new(),
    }
}

pub fn navigation_action_with_params(
    destination: impl Into<String>,
    params: HashMap<String, String>,
) -> ActionConfig {
    ActionConfig {
        kind: ActionType::Navigation,
        destination: Some(destination.into()),
        params,
    }
}

pub fn api_call_action() -> ActionConfig {
    ActionConfig {
        kind: ActionType::ApiCall,
        destination: None,
        params: HashMap::new(),
    }
}

// ==================== modifiers ====================

pub fn padding_modifier(padding: u32) -> ModifierConfig {
    ModifierConfig {
        padding: Some(padding),
        ..Default::default()
    }
}

pub fn fill_max_width_modifier() -> ModifierConfig {
    ModifierConfig {
        fill_max_width: Some(true),
        ..Default::default()
    }
}

pub fn fill_max_size_modifier() -> ModifierConfig {
    ModifierConfig {
        fill_max_size: Some(true),
        ..Default::default()
    }
}

pub fn size_modifier(
    width: u32,
    height: u32,
) -> ModifierConfig {
    ModifierConfig {
        width: Some(width),
        height: Some(height),
        ..Default::default()
    }
}

pub fn weight_modifier(weight: f32) -> ModifierConfig {
    ModifierConfig {
        weight: Some(weight),
        ..Default::default()
    }
}

// ==================== static items ====================

/// Static item carrying its own node layout under the `template` key.
pub fn item_with_template(
    data: Props,
    template: ComponentNode,
) -> Props {
    let mut item = data;
    item.insert("template".to_string(), payload(template));
    item
}

/// Static item rendered by a specific component kind instead of the
/// list's item template.
pub fn item_with_component_type(
    data: Props,
    component_type: impl Into<String>,
) -> Props {
    let mut item = data;
    item.insert("component_type".to_string(), Value::String(component_type.into()));
    item
}

pub fn spacer_item(height: u32) -> Props {
    let mut item = Props::new();
    item.insert("height".to_string(), height.into());
    item_with_component_type(item, "spacer")
}

pub fn chart_bar_item(
    title: impl Into<String>,
    subtitle: impl Into<String>,
    data: Vec<ChartDataPoint>,
) -> Props {
    chart_item("chart_bar", title, subtitle, "data", payload(data))
}

pub fn chart_line_item(
    title: impl Into<String>,
    subtitle: impl Into<String>,
    series: Vec<ChartSeries>,
) -> Props {
    chart_item("chart_line", title, subtitle, "series", payload(series))
}

pub fn chart_pie_item(
    title: impl Into<String>,
    subtitle: impl Into<String>,
    data: Vec<ChartDataPoint>,
) -> Props {
    chart_item("chart_pie", title, subtitle, "data", payload(data))
}

pub fn chart_radar_item(
    title: impl Into<String>,
    subtitle: impl Into<String>,
    data: Vec<ChartDataPoint>,
) -> Props {
    chart_item("chart_radar", title, subtitle, "data", payload(data))
}

fn chart_item(
    component_type: &str,
    title: impl Into<String>,
    subtitle: impl Into<String>,
    data_key: &str,
    data: Value,
) -> Props {
    let mut item = Props::new();
    item.insert("title".to_string(), Value::String(title.into()));
    item.insert("subtitle".to_string(), Value::String(subtitle.into()));
    item.insert(data_key.to_string(), data);
    item_with_component_type(item, component_type)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // ==================== component shape tests ====================

    #[test]
    fn test_text_component() {
        let value = serde_json::to_value(text("Hello World")).unwrap();
        assert_eq!(value, json!({"type": "text", "properties": {"text": "Hello World"}}));
    }

    #[test]
    fn test_button_with_navigation() {
        let value = serde_json::to_value(button("Click Me", navigation_action("home"))).unwrap();
        assert_eq!(value["type"], json!("button"));
        assert_eq!(value["actions"]["onClick"]["type"], json!("navigation"));
        assert_eq!(value["actions"]["onClick"]["destination"], json!("home"));
    }

    #[test]
    fn test_circle_image_properties() {
        let node = circle_image("https://example.com/avatar.jpg", 64);
        assert_eq!(node.properties["shape"], json!("circle"));
        assert_eq!(node.properties["size"], json!(64));
    }

    #[test]
    fn test_card_with_elevation() {
        let node = card_with_elevation(4.0, [text("Card content"), spacer(16)]);
        assert_eq!(node.kind, ComponentType::Card);
        assert_eq!(node.properties["elevation"], json!(4.0));
        assert_eq!(node.children.len(), 2);
    }

    #[test]
    fn test_bar_chart_payload() {
        let node = bar_chart("Sample", vec![ChartDataPoint::new("A", 10.0), ChartDataPoint::new("B", 20.0)]);
        assert_eq!(node.properties["title"], json!("Sample"));
        assert_eq!(node.properties["showLegend"], json!(true));
        assert_eq!(node.properties["data"], json!([{"label": "A", "value": 10.0}, {"label": "B", "value": 20.0}]));
    }

    // ==================== static list scenario ====================

    #[test]
    fn test_static_list_encodes_items_and_unresolved_template() {
        let items = vec![
            Props::from_iter([("label".to_string(), json!("A")), ("value".to_string(), json!(10))]),
            Props::from_iter([("label".to_string(), json!("B")), ("value".to_string(), json!(20))]),
        ];
        let template = ItemTemplate {
            kind: "default".to_string(),
            layout: Box::new(text("{{label}}")),
            actions: HashMap::new(),
        };

        let node = enhanced_lazy_column(static_data_source(items), template);
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(value["type"], json!("enhanced_lazy_column"));
        assert_eq!(
            value["dataSource"]["items"],
            json!([{"label": "A", "value": 10}, {"label": "B", "value": 20}])
        );
        assert_eq!(value["itemTemplate"]["layout"]["properties"]["text"], json!("{{label}}"));
    }

    #[test]
    fn test_mixed_static_items() {
        let items = vec![
            item_with_template(
                Props::from_iter([("title".to_string(), json!("Custom Header"))]),
                card([text("{{title}}")]),
            ),
            chart_bar_item("Sample Chart", "Test data", vec![ChartDataPoint::new("A", 10.0)]),
            spacer_item(24),
        ];

        let value = payload(&items);
        assert_eq!(value[0]["template"]["type"], json!("card"));
        assert_eq!(value[1]["component_type"], json!("chart_bar"));
        assert_eq!(value[2]["component_type"], json!("spacer"));
        assert_eq!(value[2]["height"], json!(24));
    }

    // ==================== pagination scenario ====================

    #[test]
    fn test_api_source_with_page_pagination() {
        let source = api_data_source_with_pagination("https://api.example.com/items", "GET", 20);
        let value = serde_json::to_value(&source).unwrap();

        assert_eq!(
            value["pagination"],
            json!({"type": "page", "pageSize": 20})
        );
    }
}
