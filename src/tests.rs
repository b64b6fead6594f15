use rocket::error::ErrorKind;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::todo::data::TodoResponse;
use crate::{config, rocket_from};

fn client() -> (Client, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let figment = config::figment()
        .merge(("database", dir.path().join("todoApplication.db")))
        .merge(("log_level", "off"));

    let client = Client::tracked(rocket_from(figment)).expect("valid rocket instance");
    (client, dir)
}

fn post_todo(client: &Client, body: Value) -> (Status, String) {
    let response = client
        .post("/todos/")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();
    let status = response.status();
    (status, response.into_string().unwrap_or_default())
}

fn put_todo(client: &Client, todo_id: i64, body: Value) -> (Status, String) {
    let response = client
        .put(format!("/todos/{}/", todo_id))
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();
    let status = response.status();
    (status, response.into_string().unwrap_or_default())
}

fn get_list(client: &Client, uri: &str) -> Vec<TodoResponse> {
    let response = client.get(uri.to_string()).dispatch();
    assert_eq!(response.status(), Status::Ok, "GET {}", uri);
    response.into_json().expect("todo list")
}

fn get_one(client: &Client, todo_id: i64) -> TodoResponse {
    let response = client.get(format!("/todos/{}/", todo_id)).dispatch();
    assert_eq!(response.status(), Status::Ok);
    response.into_json().expect("todo")
}

fn seed(client: &Client) {
    for body in [
        json!({
            "id": 1,
            "todo": "Learn HTML",
            "priority": "HIGH",
            "status": "TO DO",
            "category": "LEARNING",
            "dueDate": "2021-04-04",
        }),
        json!({
            "id": 2,
            "todo": "Buy a Car",
            "priority": "MEDIUM",
            "status": "IN PROGRESS",
            "category": "HOME",
            "dueDate": "2021-09-22",
        }),
        json!({
            "id": 3,
            "todo": "Clean the garden",
            "priority": "LOW",
            "status": "TO DO",
            "category": "HOME",
            "dueDate": "2021-04-04",
        }),
        json!({
            "id": 4,
            "todo": "Fix the build",
            "priority": "HIGH",
            "status": "DONE",
            "category": "WORK",
            "dueDate": "2021-02-22",
        }),
    ] {
        assert_eq!(post_todo(client, body), (Status::Ok, "Todo Successfully Added".to_string()));
    }
}

fn ids(todos: &[TodoResponse]) -> Vec<i64> {
    todos.iter().map(|todo| todo.id).collect()
}

#[test]
fn list_without_filters_returns_every_todo() {
    let (client, _dir) = client();
    seed(&client);

    assert_eq!(ids(&get_list(&client, "/todos/?search_q=")), vec![1, 2, 3, 4]);
    assert_eq!(ids(&get_list(&client, "/todos/")), vec![1, 2, 3, 4]);
}

#[test]
fn list_is_empty_array_when_nothing_matches() {
    let (client, _dir) = client();

    let response = client.get("/todos/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().as_deref(), Some("[]"));
}

#[test]
fn list_response_uses_due_date_key() {
    let (client, _dir) = client();
    seed(&client);

    let response = client.get("/todos/?search_q=Car").dispatch();
    let body: Value = response.into_json().unwrap();
    assert_eq!(
        body,
        json!([{
            "id": 2,
            "todo": "Buy a Car",
            "category": "HOME",
            "priority": "MEDIUM",
            "status": "IN PROGRESS",
            "dueDate": "2021-09-22",
        }])
    );
}

#[test]
fn list_filters_by_status_and_search() {
    let (client, _dir) = client();
    seed(&client);

    assert_eq!(ids(&get_list(&client, "/todos/?status=TO%20DO")), vec![1, 3]);
    assert_eq!(ids(&get_list(&client, "/todos/?search_q=garden&status=TO%20DO")), vec![3]);
    assert_eq!(ids(&get_list(&client, "/todos/?priority=HIGH")), vec![1, 4]);
    assert_eq!(ids(&get_list(&client, "/todos/?category=HOME")), vec![2, 3]);
}

#[test]
fn status_rule_takes_precedence_over_invalid_priority() {
    let (client, _dir) = client();
    seed(&client);

    let todos = get_list(&client, "/todos/?status=DONE&priority=URGENT");
    assert_eq!(ids(&todos), vec![4]);
}

#[test]
fn status_and_category_together_only_filter_on_status() {
    let (client, _dir) = client();
    seed(&client);

    assert_eq!(ids(&get_list(&client, "/todos/?status=TO%20DO&category=HOME")), vec![1, 3]);
}

#[test]
fn priority_and_category_together_only_filter_on_priority() {
    let (client, _dir) = client();
    seed(&client);

    assert_eq!(ids(&get_list(&client, "/todos/?priority=HIGH&category=WORK")), vec![1, 4]);
}

#[test]
fn invalid_filters_are_rejected() {
    let (client, _dir) = client();
    seed(&client);

    for (uri, message) in [
        ("/todos/?status=SOMEDAY", "Invalid Todo Status"),
        ("/todos/?priority=URGENT", "Invalid Todo Priority"),
        ("/todos/?category=HOBBY", "Invalid Todo Category"),
        ("/todos/?status=&category=WORK", "Invalid Todo Status"),
    ] {
        let response = client.get(uri).dispatch();
        assert_eq!(response.status(), Status::BadRequest, "GET {}", uri);
        assert_eq!(response.into_string().as_deref(), Some(message), "GET {}", uri);
    }
}

#[test]
fn create_then_fetch_normalizes_due_date() {
    let (client, _dir) = client();

    let (status, body) = post_todo(
        &client,
        json!({
            "id": 10,
            "todo": "Ship release",
            "priority": "HIGH",
            "status": "TO DO",
            "category": "WORK",
            "dueDate": "20211205",
        }),
    );
    assert_eq!(status, Status::Ok);
    assert_eq!(body, "Todo Successfully Added");

    let todo = get_one(&client, 10);
    assert_eq!(
        todo,
        TodoResponse {
            id: 10,
            todo: "Ship release".to_string(),
            category: "WORK".to_string(),
            priority: "HIGH".to_string(),
            status: "TO DO".to_string(),
            due_date: "2021-12-05".to_string(),
        }
    );
}

#[test]
fn create_rejects_single_digit_month_and_day() {
    let (client, _dir) = client();

    let (status, body) = post_todo(
        &client,
        json!({
            "id": 10,
            "todo": "Ship release",
            "priority": "HIGH",
            "status": "TO DO",
            "category": "WORK",
            "dueDate": "2021-1-5",
        }),
    );
    assert_eq!(status, Status::BadRequest);
    assert_eq!(body, "Invalid Due Date");

    assert_eq!(client.get("/todos/10/").dispatch().status(), Status::NotFound);
}

#[test]
fn create_validates_in_fixed_order() {
    let (client, _dir) = client();

    let cases = [
        (
            json!({
                "id": 1,
                "todo": "x",
                "priority": "BAD",
                "status": "BAD",
                "category": "BAD",
                "dueDate": "BAD",
            }),
            "Invalid Todo Status",
        ),
        (
            json!({
                "id": 1,
                "todo": "x",
                "priority": "BAD",
                "status": "DONE",
                "category": "BAD",
                "dueDate": "BAD",
            }),
            "Invalid Todo Priority",
        ),
        (
            json!({
                "id": 1,
                "todo": "x",
                "priority": "LOW",
                "status": "DONE",
                "category": "BAD",
                "dueDate": "BAD",
            }),
            "Invalid Todo Category",
        ),
        (
            json!({
                "id": 1,
                "todo": "x",
                "priority": "LOW",
                "status": "DONE",
                "dueDate": "2021-01-01",
            }),
            "Invalid Todo Category",
        ),
        (
            json!({
                "id": 1,
                "todo": "x",
                "priority": "LOW",
                "status": "DONE",
                "category": "HOME",
                "dueDate": "2021-02-30",
            }),
            "Invalid Due Date",
        ),
    ];

    for (body, message) in cases {
        assert_eq!(post_todo(&client, body), (Status::BadRequest, message.to_string()));
    }

    assert!(get_list(&client, "/todos/").is_empty());
}

#[test]
fn get_missing_todo_is_not_found() {
    let (client, _dir) = client();

    let response = client.get("/todos/404/").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn agenda_returns_todos_due_on_date() {
    let (client, _dir) = client();
    seed(&client);

    assert_eq!(ids(&get_list(&client, "/agenda/?date=2021-04-04")), vec![1, 3]);
    assert_eq!(ids(&get_list(&client, "/agenda/?date=20210404")), vec![1, 3]);
    assert_eq!(ids(&get_list(&client, "/agenda/?date=2021-02-22T09:00")), vec![4]);
    assert!(get_list(&client, "/agenda/?date=2030-01-01").is_empty());
}

#[test]
fn agenda_rejects_invalid_or_missing_date() {
    let (client, _dir) = client();

    for uri in ["/agenda/?date=2021-13-01", "/agenda/?date=soon", "/agenda/"] {
        let response = client.get(uri).dispatch();
        assert_eq!(response.status(), Status::BadRequest, "GET {}", uri);
        assert_eq!(response.into_string().as_deref(), Some("Invalid Due Date"));
    }
}

#[test]
fn updating_priority_leaves_other_fields() {
    let (client, _dir) = client();
    seed(&client);
    let before = get_one(&client, 2);

    assert_eq!(
        put_todo(&client, 2, json!({"priority": "HIGH"})),
        (Status::Ok, "Priority Updated".to_string())
    );

    let after = get_one(&client, 2);
    assert_eq!(
        after,
        TodoResponse {
            priority: "HIGH".to_string(),
            ..before
        }
    );
}

#[test]
fn update_messages_follow_precedence() {
    let (client, _dir) = client();
    seed(&client);

    assert_eq!(put_todo(&client, 1, json!({"status": "DONE"})).1, "Status Updated");
    assert_eq!(put_todo(&client, 1, json!({"category": "WORK"})).1, "Category Updated");
    assert_eq!(put_todo(&client, 1, json!({"dueDate": "2021-01-12"})).1, "Due Date Updated");
    assert_eq!(put_todo(&client, 1, json!({"todo": "Learn CSS"})).1, "Todo Updated");

    assert_eq!(
        put_todo(
            &client,
            1,
            json!({"todo": "Learn JS", "priority": "LOW", "dueDate": "20220202"})
        )
        .1,
        "Priority Updated"
    );

    let todo = get_one(&client, 1);
    assert_eq!(todo.todo, "Learn JS");
    assert_eq!(todo.status, "DONE");
    assert_eq!(todo.category, "WORK");
    assert_eq!(todo.priority, "LOW");
    assert_eq!(todo.due_date, "2022-02-02");
}

#[test]
fn invalid_update_leaves_record_unchanged() {
    let (client, _dir) = client();
    seed(&client);
    let before = get_one(&client, 3);

    assert_eq!(
        put_todo(&client, 3, json!({"todo": "Changed", "status": "DONE", "dueDate": "2021-02-31"})),
        (Status::BadRequest, "Invalid Due Date".to_string())
    );
    assert_eq!(
        put_todo(&client, 3, json!({"priority": "high"})),
        (Status::BadRequest, "Invalid Todo Priority".to_string())
    );

    assert_eq!(get_one(&client, 3), before);
}

#[test]
fn updating_missing_todo_is_not_found() {
    let (client, _dir) = client();

    let (status, _) = put_todo(&client, 99, json!({"status": "DONE"}));
    assert_eq!(status, Status::NotFound);
    assert!(get_list(&client, "/todos/").is_empty());
}

#[test]
fn delete_always_confirms() {
    let (client, _dir) = client();
    seed(&client);

    for _ in 0..2 {
        let response = client.delete("/todos/1/").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_string().as_deref(), Some("Todo Deleted"));
    }

    let response = client.delete("/todos/12345/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().as_deref(), Some("Todo Deleted"));

    assert_eq!(ids(&get_list(&client, "/todos/")), vec![2, 3, 4]);
}

#[test]
fn routes_match_with_and_without_trailing_slash() {
    let (client, _dir) = client();
    seed(&client);

    for uri in ["/todos", "/todos/", "/todos?status=DONE", "/todos/?status=DONE"] {
        let response = client.get(uri).dispatch();
        assert_eq!(response.status(), Status::Ok, "GET {}", uri);
    }

    for uri in ["/todos/2", "/todos/2/"] {
        assert_eq!(client.get(uri).dispatch().into_json::<TodoResponse>().unwrap().id, 2);
    }

    for uri in ["/agenda?date=2021-04-04", "/agenda/?date=2021-04-04"] {
        assert_eq!(ids(&get_list(&client, uri)), vec![1, 3], "GET {}", uri);
    }

    let response = client
        .post("/todos")
        .header(ContentType::JSON)
        .body(
            json!({
                "id": 5,
                "todo": "Read a book",
                "priority": "LOW",
                "status": "TO DO",
                "category": "LEARNING",
                "dueDate": "2021-05-05",
            })
            .to_string(),
        )
        .dispatch();
    assert_eq!(response.into_string().as_deref(), Some("Todo Successfully Added"));

    let response = client
        .put("/todos/5")
        .header(ContentType::JSON)
        .body(json!({"status": "DONE"}).to_string())
        .dispatch();
    assert_eq!(response.into_string().as_deref(), Some("Status Updated"));

    let response = client.delete("/todos/5").dispatch();
    assert_eq!(response.into_string().as_deref(), Some("Todo Deleted"));
}

#[test]
fn unopenable_store_aborts_launch() {
    let dir = tempfile::tempdir().expect("temp dir");
    let figment = config::figment()
        .merge(("database", dir.path().join("missing").join("todo.db")))
        .merge(("log_level", "off"));

    let error = Client::tracked(rocket_from(figment)).err().expect("ignition should fail");
    assert!(matches!(error.kind(), ErrorKind::FailedFairings(_)));
}
