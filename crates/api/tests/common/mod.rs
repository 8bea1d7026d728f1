#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use colegio_api::auth::password::hash_password;
use colegio_api::config::ServerConfig;
use colegio_api::routes;
use colegio_api::state::AppState;
use colegio_db::models::student::{CreateStudent, Student};
use colegio_db::models::user::User;
use colegio_db::repositories::{StudentRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Collect a response body as a UTF-8 string (for CSV exports).
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert a regular student with sensible defaults.
pub async fn create_student(pool: &PgPool, nombre: &str, apellidos: &str) -> Student {
    let input = CreateStudent {
        nombre: nombre.to_string(),
        apellidos: apellidos.to_string(),
        grado: Some("4to Primaria".to_string()),
        jornada: Some("Matutina".to_string()),
        modalidad: Some("Diario".to_string()),
        tipo_estudiante: Some("REGULAR".to_string()),
        estado: None,
        curso_extra_id: None,
    };
    StudentRepo::create(pool, &input)
        .await
        .expect("student creation should succeed")
}

/// Insert a student with explicit grade/modalidad, for the rule-driven tests.
pub async fn create_student_con_nivel(
    pool: &PgPool,
    nombre: &str,
    grado: &str,
    modalidad: &str,
) -> Student {
    let input = CreateStudent {
        nombre: nombre.to_string(),
        apellidos: "De Prueba".to_string(),
        grado: Some(grado.to_string()),
        jornada: None,
        modalidad: Some(modalidad.to_string()),
        tipo_estudiante: Some("REGULAR".to_string()),
        estado: None,
        curso_extra_id: None,
    };
    StudentRepo::create(pool, &input)
        .await
        .expect("student creation should succeed")
}

/// Insert a test user and return the row plus the plaintext password used.
pub async fn create_user(pool: &PgPool, username: &str) -> (User, String) {
    let password = "clave_de_prueba_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let user = UserRepo::create(pool, username, &hashed)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Insert an extra course directly and return its id.
pub async fn create_curso(pool: &PgPool, nombre: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO extra_courses (nombre, descripcion) VALUES ($1, 'Curso de prueba') RETURNING id",
    )
    .bind(nombre)
    .fetch_one(pool)
    .await
    .expect("course creation should succeed")
}
