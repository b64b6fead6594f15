//! Filter selection for `GET /todos/`.
//!
//! Rules are tried in order and the first whose fields are all present wins.
//! The order is observable: a request carrying `status` always takes the
//! status-only rule, whatever else it supplies, so the combined rules below
//! it only run for requests without the earlier fields.

use super::data::{TodoFilter, TodoQuery};
use super::validate::{check_category, check_priority, check_status, InvalidField};

struct FilterRule {
    name: &'static str,
    applies: fn(&TodoQuery) -> bool,
    build: fn(&TodoQuery) -> Result<TodoFilter, InvalidField>,
}

const FILTER_RULES: [FilterRule; 6] = [
    FilterRule {
        name: "status",
        applies: |q| q.status.is_some(),
        build: |q| {
            Ok(TodoFilter {
                status: Some(check_status(q.status.as_deref())?),
                ..TodoFilter::default()
            })
        },
    },
    FilterRule {
        name: "priority",
        applies: |q| q.priority.is_some(),
        build: |q| {
            Ok(TodoFilter {
                priority: Some(check_priority(q.priority.as_deref())?),
                ..TodoFilter::default()
            })
        },
    },
    FilterRule {
        name: "priority+status",
        applies: |q| q.priority.is_some() && q.status.is_some(),
        build: |q| {
            let priority = check_priority(q.priority.as_deref())?;
            let status = check_status(q.status.as_deref())?;
            Ok(TodoFilter {
                status: Some(status),
                priority: Some(priority),
                category: None,
            })
        },
    },
    FilterRule {
        name: "category+status",
        applies: |q| q.category.is_some() && q.status.is_some(),
        build: |q| {
            let category = check_category(q.category.as_deref())?;
            let status = check_status(q.status.as_deref())?;
            Ok(TodoFilter {
                status: Some(status),
                priority: None,
                category: Some(category),
            })
        },
    },
    FilterRule {
        name: "category",
        applies: |q| q.category.is_some(),
        build: |q| {
            Ok(TodoFilter {
                category: Some(check_category(q.category.as_deref())?),
                ..TodoFilter::default()
            })
        },
    },
    FilterRule {
        name: "category+priority",
        applies: |q| q.category.is_some() && q.priority.is_some(),
        build: |q| {
            let category = check_category(q.category.as_deref())?;
            let priority = check_priority(q.priority.as_deref())?;
            Ok(TodoFilter {
                status: None,
                priority: Some(priority),
                category: Some(category),
            })
        },
    },
];

/// Picks the first matching rule and validates only the fields it uses.
/// A query matching no rule filters on `search_q` alone.
pub fn select_filter(query: &TodoQuery) -> Result<TodoFilter, InvalidField> {
    match FILTER_RULES.iter().find(|rule| (rule.applies)(query)) {
        Some(rule) => {
            tracing::trace!(rule = rule.name, "matched todo filter rule");
            (rule.build)(query)
        }
        None => Ok(TodoFilter::default()),
    }
}
