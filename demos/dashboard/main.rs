use screenflow::{
    ChartDataPoint, ComponentBuilder, ItemTemplate, ScreenBuilder, ThemeConfig,
    components::{
        bar_chart, card, centered_top_app_bar, column, enhanced_lazy_column, navigation_action_with_params, padding_modifier, spacer, static_data_source,
        styled_text, text,
    },
    validate,
};

fn main() {
    let weekly_sleep = vec![
        ChartDataPoint::new("Mon", 6.0),
        ChartDataPoint::new("Tue", 7.0),
        ChartDataPoint::new("Wed", 5.0),
        ChartDataPoint::new("Thu", 8.0),
    ];

    let habits = static_data_source(vec![
        [("label".to_string(), "Reading".into()), ("streak".to_string(), 12.into())].into_iter().collect(),
        [("label".to_string(), "Running".into()), ("streak".to_string(), 4.into())].into_iter().collect(),
    ]);

    let habit_row = ItemTemplate {
        kind: "default".to_string(),
        layout: Box::new(card([text("{{label}}"), styled_text("{{streak}} day streak", "caption")])),
        actions: [(
            "onClick".to_string(),
            navigation_action_with_params("habit_details", [("habit".to_string(), "{{label}}".to_string())].into_iter().collect()),
        )]
        .into_iter()
        .collect(),
    };

    let screen = ScreenBuilder::new("analytics_dashboard", "Analytics Dashboard", "1.0")
        .with_layout(column([
            centered_top_app_bar("Weekly Analytics"),
            ComponentBuilder::new("scrollable_column")
                .with_modifier(padding_modifier(16))
                .with_children([
                    styled_text("Sleep Overview", "headline2"),
                    card([bar_chart("Hours Slept", weekly_sleep)]),
                    spacer(24),
                    styled_text("Habits", "headline2"),
                    enhanced_lazy_column(habits, habit_row),
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

    for issue in validate::screen_issues(&screen) {
        println!("[{}] {}: {}", issue.severity, issue.path, issue.message);
    }

    println!("{}", screen.to_pretty_json().unwrap());
}
