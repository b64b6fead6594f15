use serde::{Deserialize, Serialize};

use std::fmt;

pub type TodoID = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    ToDo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Work,
    Home,
    Learning,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::ToDo, Status::InProgress, Status::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::ToDo => "TO DO",
            Status::InProgress => "IN PROGRESS",
            Status::Done => "DONE",
        }
    }

    /// Exact, case-sensitive match against the stored spelling.
    pub fn parse(s: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    pub fn parse(s: &str) -> Option<Priority> {
        Priority::ALL.into_iter().find(|priority| priority.as_str() == s)
    }
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Work, Category::Home, Category::Learning];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Work => "WORK",
            Category::Home => "HOME",
            Category::Learning => "LEARNING",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.as_str() == s)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the `todo` table, as stored.
///
/// Enumerated columns are kept as text so rows written by other tools are
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoID,
    pub todo: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub due_date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TodoResponse {
    pub id: TodoID,
    pub todo: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

impl From<TodoRow> for TodoResponse {
    fn from(row: TodoRow) -> TodoResponse {
        TodoResponse {
            id: row.id,
            todo: row.todo,
            category: row.category,
            priority: row.priority,
            status: row.status,
            due_date: row.due_date,
        }
    }
}

/// Optional filters accepted by `GET /todos/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQuery {
    pub search_q: String,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

/// A validated filter, ready to be bound into a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddTodoRequest {
    pub id: TodoID,
    pub todo: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub todo: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Confirmation returned by `PUT /todos/<id>/`.
///
/// Only the highest-precedence supplied field is named, even when several
/// fields were changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Status,
    Priority,
    Category,
    DueDate,
    Todo,
}

impl UpdateOutcome {
    pub fn for_request(request: &UpdateTodoRequest) -> UpdateOutcome {
        if request.status.is_some() {
            UpdateOutcome::Status
        } else if request.priority.is_some() {
            UpdateOutcome::Priority
        } else if request.category.is_some() {
            UpdateOutcome::Category
        } else if request.due_date.is_some() {
            UpdateOutcome::DueDate
        } else {
            UpdateOutcome::Todo
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            UpdateOutcome::Status => "Status Updated",
            UpdateOutcome::Priority => "Priority Updated",
            UpdateOutcome::Category => "Category Updated",
            UpdateOutcome::DueDate => "Due Date Updated",
            UpdateOutcome::Todo => "Todo Updated",
        }
    }
}
