use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};
use tracing::info;

use crate::data::DBConnection;
use crate::request_error::{RequestError, RequestResult};

use super::data::*;
use super::filter::select_filter;
use super::helpers::*;
use super::validate::*;

#[get("/todos?<search_q>&<status>&<priority>&<category>")]
pub fn get_todos(
    search_q: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    category: Option<String>,
    db_connection: &State<DBConnection>,
) -> RequestResult<Json<Vec<TodoResponse>>> {
    let query = TodoQuery {
        search_q: search_q.unwrap_or_default(),
        status,
        priority,
        category,
    };
    let filter = select_filter(&query)?;

    let db_connection = db_connection.lock()?;
    let todos = get_todos_from_db(&query.search_q, &filter, &db_connection)?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

#[get("/todos/<todo_id>")]
pub fn get_todo(
    todo_id: TodoID,
    db_connection: &State<DBConnection>,
) -> RequestResult<Json<TodoResponse>> {
    let db_connection = db_connection.lock()?;

    get_todo_from_db(todo_id, &db_connection)?
        .map(|todo| Json(TodoResponse::from(todo)))
        .ok_or(RequestError::NotFound(todo_id))
}

#[get("/agenda?<date>")]
pub fn get_agenda(
    date: Option<String>,
    db_connection: &State<DBConnection>,
) -> RequestResult<Json<Vec<TodoResponse>>> {
    let due_date = check_due_date(date.as_deref())?;

    let db_connection = db_connection.lock()?;
    let todos = get_todos_due_on_from_db(&due_date, &db_connection)?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

#[post("/todos", format = "json", data = "<add_todo_request>")]
pub fn add_todo(
    add_todo_request: Json<AddTodoRequest>,
    db_connection: &State<DBConnection>,
) -> RequestResult<&'static str> {
    let request = add_todo_request.into_inner();

    let status = check_status(request.status.as_deref())?;
    let priority = check_priority(request.priority.as_deref())?;
    let category = check_category(request.category.as_deref())?;
    let due_date = check_due_date(request.due_date.as_deref())?;

    let todo = TodoRow {
        id: request.id,
        todo: request.todo,
        category: category.to_string(),
        priority: priority.to_string(),
        status: status.to_string(),
        due_date,
    };

    let db_connection = db_connection.lock()?;
    add_todo_to_db(&todo, &db_connection)?;
    info!(todo_id = todo.id, "todo added");

    Ok("Todo Successfully Added")
}

/// Applies the supplied fields over the stored row. Nothing is written when
/// any supplied field is invalid.
pub fn apply_update(
    previous: TodoRow,
    request: &UpdateTodoRequest,
) -> Result<TodoRow, InvalidField> {
    let status = request.status.as_deref().map(|s| check_status(Some(s))).transpose()?;
    let priority = request.priority.as_deref().map(|p| check_priority(Some(p))).transpose()?;
    let category = request.category.as_deref().map(|c| check_category(Some(c))).transpose()?;
    let due_date = request.due_date.as_deref().map(|d| check_due_date(Some(d))).transpose()?;

    Ok(TodoRow {
        id: previous.id,
        todo: request.todo.clone().unwrap_or(previous.todo),
        category: category.map_or(previous.category, |c| c.to_string()),
        priority: priority.map_or(previous.priority, |p| p.to_string()),
        status: status.map_or(previous.status, |s| s.to_string()),
        due_date: due_date.unwrap_or(previous.due_date),
    })
}

#[put("/todos/<todo_id>", format = "json", data = "<update_todo_request>")]
pub fn update_todo(
    todo_id: TodoID,
    update_todo_request: Json<UpdateTodoRequest>,
    db_connection: &State<DBConnection>,
) -> RequestResult<&'static str> {
    let db_connection = db_connection.lock()?;

    let previous =
        get_todo_from_db(todo_id, &db_connection)?.ok_or(RequestError::NotFound(todo_id))?;
    let updated = apply_update(previous, &update_todo_request)?;

    update_todo_in_db(&updated, &db_connection)?;
    info!(todo_id, "todo updated");

    Ok(UpdateOutcome::for_request(&update_todo_request).message())
}

#[delete("/todos/<todo_id>")]
pub fn delete_todo(
    todo_id: TodoID,
    db_connection: &State<DBConnection>,
) -> RequestResult<&'static str> {
    let db_connection = db_connection.lock()?;

    delete_todo_from_db(todo_id, &db_connection)?;
    info!(todo_id, "todo deleted");

    Ok("Todo Deleted")
}
