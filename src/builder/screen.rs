use crate::{
    Result,
    model::{ComponentNode, ComponentScreen, ComponentType, DataConfig, ScreenLayout, ThemeConfig},
};

/// Incremental constructor for [`ComponentScreen`].
///
/// The layout defaults to an empty column until [`with_layout`] replaces
/// it, so the screen under construction is valid at every step.
///
/// [`with_layout`]: ScreenBuilder::with_layout
pub struct ScreenBuilder {
    screen: ComponentScreen,
}

impl ScreenBuilder {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            screen: ComponentScreen {
                version: version.into(),
                screen: ScreenLayout {
                    id: id.into(),
                    title: title.into(),
                    layout: ComponentNode::new(ComponentType::Column),
                },
                theme: None,
                data: None,
            },
        }
    }

    pub fn with_layout(
        mut self,
        layout: ComponentNode,
    ) -> Self {
        self.screen.screen.layout = layout;
        self
    }

    pub fn with_theme(
        mut self,
        theme: ThemeConfig,
    ) -> Self {
        self.screen.theme = Some(theme);
        self
    }

    pub fn with_data(
        mut self,
        data: DataConfig,
    ) -> Self {
        self.screen.data = Some(data);
        self
    }

    /// Encode the screen under construction to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        self.screen.to_json()
    }

    /// Encode the screen under construction to human-readable JSON.
    pub fn to_pretty_json(&self) -> Result<String> {
        self.screen.to_pretty_json()
    }

    pub fn build(self) -> ComponentScreen {
        self.screen
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        ComponentBuilder,
        components::{bar_chart, card, centered_top_app_bar, column, row, spacer, styled_text, text, weight_modifier},
        model::{ChartDataPoint, ModifierConfig},
        test_util,
    };

    #[test]
    fn test_screen_builder_wire_shape() {
        let screen = ScreenBuilder::new("dashboard", "Dashboard", "1.0")
            .with_theme(ThemeConfig {
                primary_color: "#3B82F6".to_string(),
                secondary_color: "#10B981".to_string(),
                background_color: "#F9FAFB".to_string(),
                text_color: "#1F2937".to_string(),
            })
            .build();

        let value = serde_json::to_value(&screen).unwrap();
        assert_eq!(value["version"], json!("1.0"));
        assert_eq!(value["screen"]["id"], json!("dashboard"));
        assert_eq!(value["screen"]["title"], json!("Dashboard"));
        assert_eq!(value["screen"]["layout"]["type"], json!("column"));
        assert_eq!(value["theme"]["primaryColor"], json!("#3B82F6"));
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_with_layout_replaces_default() {
        let screen = ScreenBuilder::new("a", "A", "1.0")
            .with_layout(ComponentNode::new(ComponentType::Row))
            .with_layout(ComponentNode::new(ComponentType::Card))
            .build();

        assert_eq!(screen.screen.layout.kind, ComponentType::Card);
    }

    #[test]
    fn test_to_json_matches_built_value() {
        let builder = ScreenBuilder::new("a", "A", "2.1");
        let from_builder = builder.to_json().unwrap();
        let from_value = builder.build().to_json().unwrap();
        assert_eq!(from_builder, from_value);
    }

    #[test]
    fn test_complete_dashboard_screen() {
        let point = |label: &str, value: f64| ChartDataPoint {
            label: label.to_string(),
            value,
            color: Some("#FF9F43".to_string()),
            metadata: Default::default(),
        };
        let chart_data = vec![point("Mon", 6.0), point("Tue", 7.0), point("Wed", 5.0)];

        let screen = ScreenBuilder::new("test_dashboard", "Test Dashboard", "1.0")
            .with_layout(column([
                centered_top_app_bar("Test Analytics"),
                ComponentBuilder::new(ComponentType::ScrollableColumn)
                    .with_modifier(ModifierConfig {
                        fill_max_size: Some(true),
                        padding: Some(16),
                        ..Default::default()
                    })
                    .with_children([
                        styled_text("Analytics Overview", "headline2"),
                        card([bar_chart("Sample Data", chart_data)]),
                        spacer(24),
                        row([
                            ComponentBuilder::new(ComponentType::Card)
                                .with_modifier(weight_modifier(1.0))
                                .with_child(text("Left panel"))
                                .build(),
                            ComponentBuilder::new(ComponentType::Card)
                                .with_modifier(weight_modifier(1.0))
                                .with_child(text("Right panel"))
                                .build(),
                        ]),
                    ])
                    .build(),
            ]))
            .with_theme(ThemeConfig {
                primary_color: "#3B82F6".to_string(),
                secondary_color: "#10B981".to_string(),
                background_color: "#F9FAFB".to_string(),
                text_color: "#1F2937".to_string(),
            })
            .build();

        assert!(screen.validate().is_ok());

        let encoded = screen.to_pretty_json().unwrap();
        let value = test_util::parse(&encoded);
        test_util::assert_has_fields(&value, &["version", "screen", "theme"]);
        test_util::assert_has_fields(&value["screen"], &["id", "title", "layout"]);
        assert_eq!(value["screen"]["id"], json!("test_dashboard"));
        assert_eq!(value["screen"]["layout"]["children"][1]["modifier"]["padding"], json!(16));

        let decoded = ComponentScreen::from_json(&encoded).unwrap();
        assert_eq!(decoded, screen);
    }
}
