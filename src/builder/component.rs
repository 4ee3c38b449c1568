use serde_json::Value;

use crate::model::{ActionConfig, ComponentNode, ComponentType, DataSource, ItemTemplate, LoadingState, ModifierConfig};

/// Incremental constructor for [`ComponentNode`].
pub struct ComponentBuilder {
    component: ComponentNode,
}

impl ComponentBuilder {
    pub fn new(kind: impl Into<ComponentType>) -> Self {
        Self {
            component: ComponentNode::new(kind),
        }
    }

    pub fn with_id(
        mut self,
        id: impl Into<String>,
    ) -> Self {
        self.component.id = Some(id.into());
        self
    }

    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.component.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_modifier(
        mut self,
        modifier: ModifierConfig,
    ) -> Self {
        self.component.modifier = Some(modifier);
        self
    }

    pub fn with_child(
        mut self,
        child: ComponentNode,
    ) -> Self {
        self.component.children.push(child);
        self
    }

    pub fn with_children(
        mut self,
        children: impl IntoIterator<Item = ComponentNode>,
    ) -> Self {
        self.component.children.extend(children);
        self
    }

    pub fn with_action(
        mut self,
        name: impl Into<String>,
        action: ActionConfig,
    ) -> Self {
        self.component.actions.insert(name.into(), action);
        self
    }

    pub fn with_arrangement(
        mut self,
        arrangement: impl Into<String>,
    ) -> Self {
        self.component.arrangement = Some(arrangement.into());
        self
    }

    pub fn with_columns(
        mut self,
        columns: u32,
    ) -> Self {
        self.component.columns = Some(columns);
        self
    }

    pub fn with_data_source(
        mut self,
        data_source: DataSource,
    ) -> Self {
        self.component.data_source = Some(data_source);
        self
    }

    pub fn with_item_template(
        mut self,
        template: ItemTemplate,
    ) -> Self {
        self.component.item_template = Some(template);
        self
    }

    pub fn with_loading_template(
        mut self,
        loading: LoadingState,
    ) -> Self {
        self.component.loading_template = Some(loading);
        self
    }

    pub fn with_empty_template(
        mut self,
        template: ComponentNode,
    ) -> Self {
        self.component.empty_template = Some(Box::new(template));
        self
    }

    pub fn with_error_template(
        mut self,
        template: ComponentNode,
    ) -> Self {
        self.component.error_template = Some(Box::new(template));
        self
    }

    pub fn build(self) -> ComponentNode {
        self.component
    }
}
