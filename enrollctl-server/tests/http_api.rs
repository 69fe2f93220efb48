//! Router-level tests: each request goes through the full middleware stack

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use enrollctl_core::{Course, Registry, Student};
use enrollctl_server::{build_router, AppState, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(Arc::new(AppState::new()), &ServerConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["enrollments"], 0);
}

#[tokio::test]
async fn test_enrollment_flow() {
    let app = app();

    let (status, body) = send(
        &app,
        post(
            "/students",
            json!({"ci": "1001", "nombres": "Ana", "apellidos": "Pérez", "carrera": "Sistemas"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["student"]["given_names"], "Ana");

    for (code, name, instructor) in [("C101", "Algoritmos", "Dr. X"), ("C102", "Bases de Datos", "Dra. Y")] {
        let (status, body) = send(
            &app,
            post("/courses", json!({"code": code, "name": name, "instructor": instructor})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["course"]["code"], code);
    }

    for code in ["C101", "C102"] {
        let (status, body) = send(&app, post("/enrollments", json!({"ci": "1001", "code": code}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], format!("enrolled 1001 -> {code}"));
    }

    let (status, body) = send(&app, post("/enrollments", json!({"ci": "1001", "codigo": "C101"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    let (status, body) = send(&app, get("/students/1001/courses")).await;
    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = body["courses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["C101", "C102"]);

    let (status, body) = send(&app, get("/courses/C101/students")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["students"].as_array().unwrap().len(), 1);
    assert_eq!(body["students"][0]["ci"], "1001");
    assert_eq!(body["students"][0]["family_names"], "Pérez");
}

#[tokio::test]
async fn test_duplicate_registration_is_conflict() {
    let app = app();
    let student = json!({"ci": "1001", "given_names": "Ana", "family_names": "Pérez", "program": "Sistemas"});

    let (status, _) = send(&app, post("/students", student.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, post("/students", student)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "student '1001' already exists");
}

#[tokio::test]
async fn test_missing_entities_are_not_found() {
    let app = app();

    let (status, body) = send(&app, post("/enrollments", json!({"ci": "1001", "code": "C101"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "student '1001' not found");

    let (status, _) = send(&app, get("/students/1001/courses")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/courses/C101/students")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_blank_identifier_is_bad_request() {
    let app = app();

    let (status, body) = send(
        &app,
        post("/courses", json!({"code": "  ", "name": "Vacío", "instructor": "Nadie"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = send(&app, post("/enrollments", json!({"ci": "", "code": "C101"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_prepopulated_state() {
    let mut registry = Registry::new();
    registry
        .register_student(Student::new("2002", "Luis", "Rojas", "Industrial"))
        .unwrap();
    registry
        .register_course(Course::new("C201", "Redes", "Ing. Z"))
        .unwrap();
    registry.enroll("2002", "C201").unwrap();

    let app = build_router(Arc::new(AppState::with_registry(registry)), &ServerConfig::default());
    let (status, body) = send(&app, get("/courses/C201/students")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["students"][0]["program"], "Industrial");
}
