//! HTTP client tests against a mock server

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::config::AppConfig;
use crate::domain::{Department, Employee, LoginRequest, RegisterRequest, Role, Todo};
use crate::session::SessionContext;

fn client_for(server: &MockServer, session: &SessionContext) -> HttpApi {
    let config = AppConfig::builder()
        .api_base_url(server.uri())
        .build()
        .expect("mock server uri is valid");
    HttpApi::new(config, session.clone())
}

fn signed_in() -> SessionContext {
    let session = SessionContext::in_memory();
    session.set("Bearer abc", Role::Admin);
    session
}

#[tokio::test]
async fn test_list_todos_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Learn Rust", "description": "ownership", "completed": false},
            {"id": 2, "title": "Ship", "description": "release", "completed": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, &signed_in());
    let todos: Vec<Todo> = ResourceApi::<Todo>::list(&api).await.expect("list failed");

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[1].id, Some(2));
    assert!(todos[1].completed);
}

#[tokio::test]
async fn test_create_employee_posts_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .and(body_json(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "departmentId": 2
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 10,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "departmentId": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, &signed_in());
    let draft = Employee {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        department_id: Some(2),
        ..Default::default()
    };
    let created = ResourceApi::<Employee>::create(&api, &draft).await.expect("create failed");
    assert_eq!(created.id, Some(10));
}

#[tokio::test]
async fn test_update_and_delete_use_record_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/departments/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4, "departmentName": "Ops", "departmentDescription": "Operations"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/departments/4"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Department deleted successfully!."))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, &signed_in());
    let dept = Department {
        id: None,
        department_name: "Ops".into(),
        department_description: "Operations".into(),
    };
    let updated = ResourceApi::<Department>::update(&api, 4, &dept).await.unwrap();
    assert_eq!(updated.id, Some(4));
    ResourceApi::<Department>::delete(&api, 4).await.unwrap();
}

#[tokio::test]
async fn test_complete_todo_patches() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/todos/3/complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "title": "t", "description": "d", "completed": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, &signed_in());
    let todo = api.complete(3).await.unwrap();
    assert!(todo.completed);
}

#[tokio::test]
async fn test_shared_client_follows_session_changes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/departments"))
        .and(header("Authorization", "Bearer later"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/departments"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    // built once while signed out, then cloned per call site
    let session = SessionContext::in_memory();
    let api = client_for(&server, &session);
    let first = api.clone();
    let second = api.clone();

    session.set("Bearer later", Role::User);
    let departments = ResourceApi::<Department>::list(&first).await.expect("list failed");
    assert!(departments.is_empty());

    session.clear();
    let err = ResourceApi::<Department>::list(&second).await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_status_error_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Employee is not exists with given id: 99"))
        .mount(&server)
        .await;

    let api = client_for(&server, &signed_in());
    let err = ResourceApi::<Employee>::get(&api, 99).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            message: "Employee is not exists with given id: 99".into()
        }
    );
}

#[tokio::test]
async fn test_unauthorized_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let session = signed_in();
    let api = client_for(&server, &session);
    let err = ResourceApi::<Todo>::list(&api).await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_unknown_record_fields_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/departments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "departmentName": "A", "departmentDescription": "B", "budget": 5}
        ])))
        .mount(&server)
        .await;

    let api = client_for(&server, &signed_in());
    let err = ResourceApi::<Department>::list(&api).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_login_and_register() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"usernameOrEmail": "jd", "password": "abcd"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "xyz", "tokenType": "Bearer", "role": "ROLE_ADMIN"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_string("User registered successfully!."))
        .expect(1)
        .mount(&server)
        .await;

    let session = SessionContext::in_memory();
    let api = client_for(&server, &session);

    let message = api
        .register(&RegisterRequest {
            name: "John Doe".into(),
            username: "jd".into(),
            email: "j@d.com".into(),
            password: "abcd".into(),
        })
        .await
        .unwrap();
    assert_eq!(message, "User registered successfully!.");

    let login = api
        .login(&LoginRequest {
            username_or_email: "jd".into(),
            password: "abcd".into(),
        })
        .await
        .unwrap();
    assert_eq!(login.authorization(), "Bearer xyz");
    assert_eq!(login.role(), Role::Admin);
}

#[tokio::test]
async fn test_transport_error_when_server_is_down() {
    let config = AppConfig::builder()
        .api_base_url("http://127.0.0.1:9")
        .build()
        .unwrap();
    let api = HttpApi::new(config, SessionContext::in_memory());
    let err = ResourceApi::<Todo>::list(&api).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_in_memory_records_calls_and_joins_departments() {
    let api = InMemoryApi::new();
    api.seed_departments([Department {
        id: Some(1),
        department_name: "Math".into(),
        department_description: "Numbers".into(),
    }]);

    let created = ResourceApi::<Employee>::create(
        &api,
        &Employee {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@x.io".into(),
            department_id: Some(1),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(created.id, Some(2));
    assert_eq!(created.department_name.as_deref(), Some("Math"));
    assert_eq!(api.calls(), vec![ApiCall::Create(crate::domain::Resource::Employee)]);
}
