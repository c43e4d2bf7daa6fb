//! 従業員 API 統合テスト
//!
//! `build_app` で組み立てたルーター全体に対してリクエストを送り、
//! ステータスコードとレスポンスボディを検証する。ストアはインメモリ実装を使用する。
//!
//! ## テストケース
//!
//! - 保存 → 201 と採番済み ID
//! - 更新で ID が 0 以下 → 400
//! - 最大値の ID で更新した後も保存できる
//! - 取得で ID が 0 以下 → 400、存在しない ID → 500
//! - 削除 → 204（繰り返しても 204）
//! - 一覧は空配列 → 保存件数分の配列
//! - 全レスポンスに `x-request-id` が付与される

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use pretty_assertions::assert_eq;
use roster_employee_service::{app_builder::build_app, handler::EmployeeDto};
use roster_infra::repository::InMemoryEmployeeRepository;
use serde_json::{Value as JsonValue, json};
use tower::ServiceExt;

// --- テストヘルパー ---

fn create_test_app() -> Router {
    build_app(Arc::new(InMemoryEmployeeRepository::new()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<JsonValue>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn create_employee(app: &Router, name: &str, description: &str) -> EmployeeDto {
    let response = send(
        app,
        Method::POST,
        "/employee/save",
        Some(json!({ "employeeName": name, "employeeDescription": description })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// --- テスト ---

#[tokio::test]
async fn test_helloは固定文字列を返す() {
    // Given
    let app = create_test_app();

    // When
    let response = send(&app, Method::GET, "/employee/hello", None).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"Hello boot");
}

#[tokio::test]
async fn test_保存すると201で採番済みidを返す() {
    // Given
    let app = create_test_app();

    // When
    let created = create_employee(&app, "John Doe", "Senior Developer").await;

    // Then
    assert!(created.employee_id > 0);
    assert_eq!(created.employee_name.as_deref(), Some("John Doe"));
    assert_eq!(
        created.employee_description.as_deref(),
        Some("Senior Developer")
    );
}

#[tokio::test]
async fn test_nullボディの保存は400() {
    // Given
    let app = create_test_app();

    // When
    let response = send(&app, Method::POST, "/employee/save", Some(JsonValue::Null)).await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let list: Vec<EmployeeDto> =
        body_json(send(&app, Method::GET, "/employee/getall", None).await).await;
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_更新すると200で変更が反映される() {
    // Given
    let app = create_test_app();
    let created = create_employee(&app, "John Doe", "Senior Developer").await;

    // When
    let response = send(
        &app,
        Method::PUT,
        "/employee/update",
        Some(json!({
            "employeeId": created.employee_id,
            "employeeName": "Jane Doe",
            "employeeDescription": "Staff Engineer"
        })),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let updated: EmployeeDto = body_json(response).await;
    assert_eq!(
        updated,
        EmployeeDto {
            employee_id:          created.employee_id,
            employee_name:        Some("Jane Doe".to_string()),
            employee_description: Some("Staff Engineer".to_string()),
        }
    );

    let fetched: EmployeeDto = body_json(
        send(
            &app,
            Method::GET,
            &format!("/employee/getone/{}", created.employee_id),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_最大値のidで更新した後も保存は201を返す() {
    // Given
    let app = create_test_app();
    let response = send(
        &app,
        Method::PUT,
        "/employee/update",
        Some(json!({ "employeeId": i64::MAX, "employeeName": "最大" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // When
    let created = create_employee(&app, "John Doe", "Senior Developer").await;

    // Then
    assert!(created.employee_id > 0);
    assert_ne!(created.employee_id, i64::MAX);
    let list: Vec<EmployeeDto> =
        body_json(send(&app, Method::GET, "/employee/getall", None).await).await;
    assert_eq!(list.len(), 2);
}

#[tokio::test]
async fn test_idが0の更新は400() {
    // Given
    let app = create_test_app();

    // When
    let response = send(
        &app,
        Method::PUT,
        "/employee/update",
        Some(json!({ "employeeId": 0, "employeeName": "Test" })),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: JsonValue = body_json(response).await;
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_idなしの更新は400() {
    // Given
    let app = create_test_app();

    // When
    let response = send(
        &app,
        Method::PUT,
        "/employee/update",
        Some(json!({ "employeeName": "Test" })),
    )
    .await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_idが0の取得は400() {
    // Given
    let app = create_test_app();

    // When
    let response = send(&app, Method::GET, "/employee/getone/0", None).await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_存在しないidの取得は500() {
    // Given
    let app = create_test_app();

    // When
    let response = send(&app, Method::GET, "/employee/getone/99", None).await;

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: JsonValue = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn test_削除は204で繰り返しても204() {
    // Given
    let app = create_test_app();
    let created = create_employee(&app, "John Doe", "Senior Developer").await;
    let uri = format!("/employee/delete/{}", created.employee_id);

    // When
    let first = send(&app, Method::DELETE, &uri, None).await;
    let second = send(&app, Method::DELETE, &uri, None).await;

    // Then
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(first).await.is_empty());
    assert_eq!(second.status(), StatusCode::NO_CONTENT);

    let response = send(
        &app,
        Method::GET,
        &format!("/employee/getone/{}", created.employee_id),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_負のidの削除は400() {
    // Given
    let app = create_test_app();

    // When
    let response = send(&app, Method::DELETE, "/employee/delete/-1", None).await;

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_一覧は空配列から保存件数分に増える() {
    // Given
    let app = create_test_app();
    let empty: Vec<EmployeeDto> =
        body_json(send(&app, Method::GET, "/employee/getall", None).await).await;
    assert!(empty.is_empty());

    // When
    for i in 0..3 {
        create_employee(&app, &format!("社員{i}"), "説明").await;
    }

    // Then
    let response = send(&app, Method::GET, "/employee/getall", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list: Vec<EmployeeDto> = body_json(response).await;
    assert_eq!(list.len(), 3);
}

#[tokio::test]
async fn test_レスポンスにrequest_idが付与される() {
    // Given
    let app = create_test_app();

    // When
    let generated = send(&app, Method::GET, "/health", None).await;
    let propagated = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Then
    assert_eq!(generated.status(), StatusCode::OK);
    assert!(generated.headers().contains_key("x-request-id"));
    assert_eq!(propagated.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn test_health_checkはhealthyを返す() {
    // Given
    let app = create_test_app();

    // When
    let response = send(&app, Method::GET, "/health", None).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let body: JsonValue = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
