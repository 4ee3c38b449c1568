mod action;
mod chart;
mod modifier;
mod node;
mod screen;
mod source;

pub use action::{ActionConfig, ActionType};
pub use chart::{ChartConfig, ChartDataPoint, ChartSeries};
pub use modifier::{GradientConfig, ModifierConfig};
pub use node::{ComponentNode, ComponentType, LoadingState, Props};
pub use screen::{ComponentScreen, DataConfig, ScreenLayout, ThemeConfig};
pub use source::{DataSource, DataSourceType, ItemTemplate, PaginationConfig, PaginationType};
