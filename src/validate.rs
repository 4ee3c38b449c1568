//! Advisory validation for screen documents.
//!
//! Construction never rejects a document and serialization succeeds even
//! for semantically invalid trees; this module is the explicit pass that
//! reports such documents. Diagnostics are collected over the whole tree,
//! never fail-fast, and nothing is mutated.

use std::collections::HashSet;

use serde::Serialize;
use tracing::trace;

use crate::{
    Result, ScreenflowError,
    model::{ActionConfig, ActionType, ComponentNode, ComponentScreen, DataSource, DataSourceType, ItemTemplate, PaginationType},
    template,
};

/// How serious a diagnostic is.
///
/// `Error` marks a document a conforming client cannot render as
/// intended; `Warning` marks fields that are ignored by convention.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// Machine-readable diagnostic category.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssueCode {
    DataSourceWithoutItemTemplate,
    ItemTemplateWithoutDataSource,
    ApiSourceMissingUrl,
    ApiSourceWithItems,
    StaticSourceWithFetchFields,
    PaginationZeroPageSize,
    PaginationIrrelevantParam,
    NavigationMissingDestination,
    DuplicateNodeId,
    UnresolvedPlaceholder,
    EmptyVersion,
}

/// One collected diagnostic, anchored to a path into the document such as
/// `screen.layout.children[2].dataSource`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: IssueCode,
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(
        severity: Severity,
        code: IssueCode,
        path: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code,
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a whole document: envelope checks plus the node tree under
/// `screen.layout`.
pub fn screen_issues(screen: &ComponentScreen) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if screen.version.is_empty() {
        issues.push(ValidationIssue::new(
            Severity::Error,
            IssueCode::EmptyVersion,
            "version",
            "version must not be empty",
        ));
    }

    let mut seen_ids = HashSet::new();
    check_node(&screen.screen.layout, "screen.layout", &mut seen_ids, &mut issues);

    trace!("screen '{}' produced {} validation issue(s)", screen.screen.id, issues.len());
    issues
}

/// Validate a standalone node tree.
pub fn node_issues(node: &ComponentNode) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();
    check_node(node, "node", &mut seen_ids, &mut issues);
    issues
}

fn check_node(
    node: &ComponentNode,
    path: &str,
    seen_ids: &mut HashSet<String>,
    issues: &mut Vec<ValidationIssue>,
) {
    if let Some(id) = &node.id {
        if !seen_ids.insert(id.clone()) {
            issues.push(ValidationIssue::new(
                Severity::Error,
                IssueCode::DuplicateNodeId,
                path,
                format!("node id '{}' appears more than once in the tree", id),
            ));
        }
    }

    match (&node.data_source, &node.item_template) {
        (Some(_), None) => issues.push(ValidationIssue::new(
            Severity::Error,
            IssueCode::DataSourceWithoutItemTemplate,
            path,
            "dataSource is set but itemTemplate is missing",
        )),
        (None, Some(_)) => issues.push(ValidationIssue::new(
            Severity::Error,
            IssueCode::ItemTemplateWithoutDataSource,
            path,
            "itemTemplate is set but dataSource is missing",
        )),
        _ => {}
    }

    if let Some(source) = &node.data_source {
        check_source(source, &format!("{}.dataSource", path), issues);
        if let Some(template) = &node.item_template {
            check_bindings(source, template, &format!("{}.itemTemplate", path), issues);
        }
    }

    for (name, action) in &node.actions {
        check_action(action, &format!("{}.actions.{}", path, name), issues);
    }

    if let Some(template) = &node.item_template {
        for (name, action) in &template.actions {
            check_action(action, &format!("{}.itemTemplate.actions.{}", path, name), issues);
        }
        check_node(&template.layout, &format!("{}.itemTemplate.layout", path), seen_ids, issues);
    }

    for (i, child) in node.children.iter().enumerate() {
        check_node(child, &format!("{}.children[{}]", path, i), seen_ids, issues);
    }
    if let Some(empty) = &node.empty_template {
        check_node(empty, &format!("{}.emptyTemplate", path), seen_ids, issues);
    }
    if let Some(error) = &node.error_template {
        check_node(error, &format!("{}.errorTemplate", path), seen_ids, issues);
    }
}

fn check_source(
    source: &DataSource,
    path: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    match &source.kind {
        DataSourceType::Api => {
            if source.url.is_none() {
                issues.push(ValidationIssue::new(
                    Severity::Error,
                    IssueCode::ApiSourceMissingUrl,
                    path,
                    "api data source has no url",
                ));
            }
            if !source.items.is_empty() {
                issues.push(ValidationIssue::new(
                    Severity::Warning,
                    IssueCode::ApiSourceWithItems,
                    path,
                    "literal items on an api data source are ignored",
                ));
            }
        }
        DataSourceType::Static => {
            let mut fetch_fields = Vec::new();
            if source.url.is_some() {
                fetch_fields.push("url");
            }
            if source.method.is_some() {
                fetch_fields.push("method");
            }
            if !source.headers.is_empty() {
                fetch_fields.push("headers");
            }
            if source.pagination.is_some() {
                fetch_fields.push("pagination");
            }
            if !fetch_fields.is_empty() {
                issues.push(ValidationIssue::new(
                    Severity::Warning,
                    IssueCode::StaticSourceWithFetchFields,
                    path,
                    format!("static data source carries fetch fields: {}", fetch_fields.join(", ")),
                ));
            }
        }
        DataSourceType::Database | DataSourceType::Other(_) => {}
    }

    if let Some(pagination) = &source.pagination {
        let path = format!("{}.pagination", path);
        if pagination.page_size == 0 {
            issues.push(ValidationIssue::new(
                Severity::Error,
                IssueCode::PaginationZeroPageSize,
                &path,
                "pageSize must be at least 1",
            ));
        }

        let params = [
            ("offsetParam", pagination.offset_param.is_some(), PaginationType::Offset),
            ("limitParam", pagination.limit_param.is_some(), PaginationType::Offset),
            ("cursorParam", pagination.cursor_param.is_some(), PaginationType::Cursor),
            ("pageParam", pagination.page_param.is_some(), PaginationType::Page),
        ];
        if !matches!(pagination.kind, PaginationType::Other(_)) {
            for (name, present, relevant_kind) in params {
                if present && pagination.kind != relevant_kind {
                    issues.push(ValidationIssue::new(
                        Severity::Warning,
                        IssueCode::PaginationIrrelevantParam,
                        &path,
                        format!("{} is ignored by {} pagination", name, pagination.kind),
                    ));
                }
            }
        }
    }
}

fn check_action(
    action: &ActionConfig,
    path: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    if action.kind == ActionType::Navigation && action.destination.is_none() {
        issues.push(ValidationIssue::new(
            Severity::Error,
            IssueCode::NavigationMissingDestination,
            path,
            "navigation action has no destination",
        ));
    }
}

/// Check that every placeholder of the template resolves against the
/// literal items of a static source. Only the first path segment of a
/// dotted token is checked; deeper traversal happens client-side.
fn check_bindings(
    source: &DataSource,
    item_template: &ItemTemplate,
    path: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    if source.kind != DataSourceType::Static || source.items.is_empty() {
        return;
    }

    for token in template::template_placeholders(item_template) {
        let field = token.split('.').next().unwrap_or(&token);
        if !source.items.iter().all(|item| item.contains_key(field)) {
            issues.push(ValidationIssue::new(
                Severity::Warning,
                IssueCode::UnresolvedPlaceholder,
                path,
                format!("placeholder '{{{{{}}}}}' is not present in every static item", token),
            ));
        }
    }
}

impl ComponentScreen {
    /// Strict validation: `Ok` when no `Error`-severity issue exists,
    /// otherwise a single [`ScreenflowError::Validation`] joining the
    /// collected messages. Warnings never fail this check.
    pub fn validate(&self) -> Result<()> {
        let errors: Vec<String> = screen_issues(self)
            .into_iter()
            .filter(|issue| issue.severity == Severity::Error)
            .map(|issue| format!("{}: {}", issue.path, issue.message))
            .collect();

        if !errors.is_empty() {
            return Err(ScreenflowError::Validation(errors.join(", ")));
        }
        Ok(())
    }
}
