//! Membership checks for the enumerated todo fields.

use thiserror::Error;

use super::data::{Category, Priority, Status};
use super::date;

/// A request field that failed validation. `Display` is the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidField {
    #[error("Invalid Todo Status")]
    Status,
    #[error("Invalid Todo Priority")]
    Priority,
    #[error("Invalid Todo Category")]
    Category,
    #[error("Invalid Due Date")]
    DueDate,
}

pub fn is_valid_status(s: &str) -> bool {
    Status::parse(s).is_some()
}

pub fn is_valid_priority(p: &str) -> bool {
    Priority::parse(p).is_some()
}

pub fn is_valid_category(c: &str) -> bool {
    Category::parse(c).is_some()
}

pub fn is_valid_date(d: &str) -> bool {
    date::is_valid_date(d)
}

pub fn check_status(s: Option<&str>) -> Result<Status, InvalidField> {
    s.and_then(Status::parse).ok_or(InvalidField::Status)
}

pub fn check_priority(p: Option<&str>) -> Result<Priority, InvalidField> {
    p.and_then(Priority::parse).ok_or(InvalidField::Priority)
}

pub fn check_category(c: Option<&str>) -> Result<Category, InvalidField> {
    c.and_then(Category::parse).ok_or(InvalidField::Category)
}

/// Validates a due date and returns it as `yyyy-MM-dd`.
pub fn check_due_date(d: Option<&str>) -> Result<String, InvalidField> {
    d.and_then(date::normalize_date).ok_or(InvalidField::DueDate)
}
