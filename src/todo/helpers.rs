use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::internal_error::InternalResult;

use super::data::*;

const TODO_COLUMNS: &str = "id, todo, category, priority, status, due_date";

pub fn get_todo_from_row(row: &Row) -> rusqlite::Result<TodoRow> {
    Ok(TodoRow {
        id: row.get(0)?,
        todo: row.get(1)?,
        category: row.get(2)?,
        priority: row.get(3)?,
        status: row.get(4)?,
        due_date: row.get(5)?,
    })
}

/// Rows whose text contains `search_q` (SQLite `LIKE` semantics) and whose
/// enumerated columns equal every field set in `filter`.
pub fn get_todos_from_db(
    search_q: &str,
    filter: &TodoFilter,
    db_connection: &Connection,
) -> InternalResult<Vec<TodoRow>> {
    let mut sql = format!("SELECT {} FROM todo WHERE todo LIKE ?1", TODO_COLUMNS);
    let mut values = vec![format!("%{}%", search_q)];

    let conditions = [
        ("status", filter.status.map(Status::as_str)),
        ("priority", filter.priority.map(Priority::as_str)),
        ("category", filter.category.map(Category::as_str)),
    ];

    for (column, value) in conditions {
        if let Some(value) = value {
            values.push(value.to_string());
            sql.push_str(&format!(" AND {} = ?{}", column, values.len()));
        }
    }

    let mut statement = db_connection.prepare(&sql)?;
    let todos = statement
        .query_map(params_from_iter(values.iter()), get_todo_from_row)?
        .collect::<rusqlite::Result<Vec<TodoRow>>>()?;

    Ok(todos)
}

pub fn get_todo_from_db(
    todo_id: TodoID,
    db_connection: &Connection,
) -> InternalResult<Option<TodoRow>> {
    let todo = db_connection
        .query_row(
            &format!("SELECT {} FROM todo WHERE id = ?1", TODO_COLUMNS),
            params![todo_id],
            get_todo_from_row,
        )
        .optional()?;

    Ok(todo)
}

/// `due_date` must already be normalized.
pub fn get_todos_due_on_from_db(
    due_date: &str,
    db_connection: &Connection,
) -> InternalResult<Vec<TodoRow>> {
    let mut statement =
        db_connection.prepare(&format!("SELECT {} FROM todo WHERE due_date = ?1", TODO_COLUMNS))?;
    let todos = statement
        .query_map(params![due_date], get_todo_from_row)?
        .collect::<rusqlite::Result<Vec<TodoRow>>>()?;

    Ok(todos)
}

pub fn add_todo_to_db(todo: &TodoRow, db_connection: &Connection) -> InternalResult<()> {
    db_connection.execute(
        "INSERT INTO todo (id, todo, priority, status, category, due_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![todo.id, todo.todo, todo.priority, todo.status, todo.category, todo.due_date],
    )?;

    Ok(())
}

/// Rewrites every column of the row with `todo.id`.
pub fn update_todo_in_db(todo: &TodoRow, db_connection: &Connection) -> InternalResult<()> {
    db_connection.execute(
        "UPDATE todo
         SET todo = ?1, priority = ?2, status = ?3, category = ?4, due_date = ?5
         WHERE id = ?6",
        params![todo.todo, todo.priority, todo.status, todo.category, todo.due_date, todo.id],
    )?;

    Ok(())
}

pub fn delete_todo_from_db(todo_id: TodoID, db_connection: &Connection) -> InternalResult<()> {
    db_connection.execute("DELETE FROM todo WHERE id = ?1", params![todo_id])?;

    Ok(())
}
