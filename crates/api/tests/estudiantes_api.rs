//! HTTP-level integration tests for student CRUD.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_student, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_student_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "nombre": "Ana",
        "apellidos": "García López",
        "grado": "9no",
        "jornada": "Matutina",
        "modalidad": "Diario"
    });
    let response = post_json(app, "/api/estudiantes", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Estudiante creado exitosamente");
    assert_eq!(json["data"]["nombre"], "Ana");
    // tipo_estudiante defaults to REGULAR when omitted.
    assert_eq!(json["data"]["tipo_estudiante"], "REGULAR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_students_includes_count(pool: PgPool) {
    create_student(&pool, "Luis", "Pérez").await;
    create_student(&pool, "María", "Santos").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/estudiantes").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_student_by_id(pool: PgPool) {
    let estudiante = create_student(&pool, "Luis", "Pérez").await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/estudiantes/{}", estudiante.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["apellidos"], "Pérez");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_student_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/estudiantes/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_student_applies_partial_fields(pool: PgPool) {
    let estudiante = create_student(&pool, "Luis", "Pérez").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "grado": "5to Primaria" });
    let response = put_json(app, &format!("/api/estudiantes/{}", estudiante.id), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["grado"], "5to Primaria");
    // Untouched fields keep their values.
    assert_eq!(json["data"]["nombre"], "Luis");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_student_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "grado": "5to Primaria" });
    let response = put_json(app, "/api/estudiantes/999999", body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_student(pool: PgPool) {
    let estudiante = create_student(&pool, "Luis", "Pérez").await;
    let app = common::build_test_app(pool.clone());

    let response = delete(app, &format!("/api/estudiantes/{}", estudiante.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Estudiante eliminado exitosamente");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/estudiantes/{}", estudiante.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
