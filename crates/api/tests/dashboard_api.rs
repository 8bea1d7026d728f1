//! HTTP-level integration tests for the dashboard aggregates.
//!
//! Rows are seeded with explicit `created_at` values so the date-bucketed
//! results are deterministic.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_student, get};
use sqlx::PgPool;

/// Insert a category payment with a pinned creation timestamp.
async fn seed_pago(
    pool: &PgPool,
    tabla: &str,
    student_id: i64,
    monto_total: &str,
    monto_adelanto: &str,
    created_at: &str,
) {
    let query = format!(
        "INSERT INTO {tabla} (student_id, monto_total, monto_adelanto, created_at) \
         VALUES ($1, $2::numeric, $3::numeric, $4::timestamptz)"
    );
    sqlx::query(&query)
        .bind(student_id)
        .bind(monto_total)
        .bind(monto_adelanto)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("seed should succeed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn income_by_month_agrupa_y_ordena(pool: PgPool) {
    let a = create_student(&pool, "Ana", "Uno").await;
    let b = create_student(&pool, "Beto", "Dos").await;
    let c = create_student(&pool, "Caro", "Tres").await;

    // Dos pagos de enero en una tabla y uno de febrero en otra.
    seed_pago(&pool, "pago_inscripcion", a.id, "100.00", "100.00", "2024-01-15T12:00:00Z").await;
    seed_pago(&pool, "pago_inscripcion", b.id, "50.00", "50.00", "2024-01-20T12:00:00Z").await;
    seed_pago(&pool, "pago_excursion", c.id, "25.00", "25.00", "2024-02-01T12:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/income-by-month").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let meses = json.as_array().unwrap();

    assert_eq!(meses.len(), 2);
    // Orden descendente por mes.
    assert_eq!(meses[0]["mes"], "2024-02");
    assert_eq!(meses[0]["total_ingresos"], "25.00");
    assert_eq!(meses[1]["mes"], "2024-01");
    assert_eq!(meses[1]["total_ingresos"], "150.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn income_by_day_respeta_el_rango(pool: PgPool) {
    let a = create_student(&pool, "Ana", "Uno").await;
    let b = create_student(&pool, "Beto", "Dos").await;

    seed_pago(&pool, "pago_inscripcion", a.id, "100.00", "100.00", "2024-03-05T12:00:00Z").await;
    seed_pago(&pool, "pago_inscripcion", b.id, "40.00", "40.00", "2024-04-01T12:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/dashboard/income-by-day?start=2024-03-01&end=2024-03-31",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let dias = json.as_array().unwrap();
    assert_eq!(dias.len(), 1, "el pago de abril queda fuera del rango");
    assert_eq!(dias[0]["dia"], "2024-03-05");
    assert_eq!(dias[0]["total_ingresos"], "100.00");
}

/// A dropped source table must not abort the aggregate.
#[sqlx::test(migrations = "../../db/migrations")]
async fn fuente_inexistente_no_rompe_el_agregado(pool: PgPool) {
    let a = create_student(&pool, "Ana", "Uno").await;
    seed_pago(&pool, "pago_inscripcion", a.id, "100.00", "100.00", "2024-01-15T12:00:00Z").await;

    sqlx::query("DROP TABLE pago_excursion CASCADE")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/income-by-month").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let meses = json.as_array().unwrap();
    assert_eq!(meses.len(), 1);
    assert_eq!(meses[0]["total_ingresos"], "100.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn income_by_type_descarta_fuentes_en_cero(pool: PgPool) {
    let a = create_student(&pool, "Ana", "Uno").await;
    let b = create_student(&pool, "Beto", "Dos").await;

    seed_pago(&pool, "pago_inscripcion", a.id, "100.00", "100.00", "2024-01-15T12:00:00Z").await;
    seed_pago(&pool, "pago_uniforme", b.id, "300.00", "300.00", "2024-01-16T12:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/income-by-type").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let tipos = json.as_array().unwrap();

    assert_eq!(tipos.len(), 2, "solo las fuentes con ingresos");
    // Orden descendente por total.
    assert_eq!(tipos[0]["tipo_pago"], "UNIFORMES");
    assert_eq!(tipos[1]["tipo_pago"], "INSCRIPCIÓN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn total_mora_suma_todas_las_tablas(pool: PgPool) {
    let a = create_student(&pool, "Ana", "Uno").await;
    let b = create_student(&pool, "Beto", "Dos").await;

    sqlx::query(
        "INSERT INTO pago_colegiaturas (student_id, mes, anio, monto_colegiatura, mora) \
         VALUES ($1, 'FEBRERO', 2024, 350.00, 30.00)",
    )
    .bind(a.id)
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO pago_inscripcion (student_id, monto_total, monto_adelanto, mora) \
         VALUES ($1, 100.00, 100.00, 30.00)",
    )
    .bind(b.id)
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/total-mora").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_mora"], "60.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn top_deudores_respeta_el_limite(pool: PgPool) {
    let a = create_student(&pool, "Ana", "Uno").await;
    let b = create_student(&pool, "Beto", "Dos").await;

    // Ana debe 400, Beto 50.
    seed_pago(&pool, "pago_inscripcion", a.id, "500.00", "100.00", "2024-01-15T12:00:00Z").await;
    seed_pago(&pool, "pago_inscripcion", b.id, "100.00", "50.00", "2024-01-15T12:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/pendientes/top-deudores?limite=1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let deudores = json.as_array().unwrap();
    assert_eq!(deudores.len(), 1);
    assert_eq!(deudores[0]["estudiante"], "Ana Uno");
    assert_eq!(deudores[0]["total_pendiente"], "400.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pendientes_total_desde_la_vista(pool: PgPool) {
    let a = create_student(&pool, "Ana", "Uno").await;
    let b = create_student(&pool, "Beto", "Dos").await;

    seed_pago(&pool, "pago_inscripcion", a.id, "500.00", "100.00", "2024-01-15T12:00:00Z").await;
    seed_pago(&pool, "pago_uniforme", b.id, "100.00", "50.00", "2024-01-15T12:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/pendientes/total").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], "450.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn students_by_type_cuenta_por_tipo(pool: PgPool) {
    create_student(&pool, "Ana", "Uno").await;
    create_student(&pool, "Beto", "Dos").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/students-by-type").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let tipos = json.as_array().unwrap();
    assert_eq!(tipos.len(), 1);
    assert_eq!(tipos[0]["tipo_estudiante"], "REGULAR");
    assert_eq!(tipos[0]["total"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resumen_general(pool: PgPool) {
    let a = create_student(&pool, "Ana", "Uno").await;
    seed_pago(&pool, "pago_inscripcion", a.id, "500.00", "100.00", "2024-01-15T12:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/resumen").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["estudiantes"]["total"], 1);
    assert_eq!(json["estudiantes"]["activos"], 1);
    assert_eq!(json["finanzas"]["totalIngresos"], "100.00");
    assert_eq!(json["finanzas"]["totalPendiente"], "400.00");
    assert_eq!(json["finanzas"]["estudiantesConDeuda"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detailed_report_resume_cada_fuente(pool: PgPool) {
    let a = create_student(&pool, "Ana", "Uno").await;
    seed_pago(&pool, "pago_inscripcion", a.id, "100.00", "100.00", "2024-01-15T12:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/detailed-report").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["totalGeneral"], "100.00");
    let summary = json["summary"].as_array().unwrap();
    assert_eq!(summary.len(), 10, "una entrada por fuente");

    let inscripcion = summary
        .iter()
        .find(|s| s["tipo_pago"] == "INSCRIPCIÓN")
        .unwrap();
    assert_eq!(inscripcion["cantidad_pagos"], 1);
    assert_eq!(inscripcion["total_ingresos"], "100.00");

    let detalles = json["details"]["inscripciones"].as_array().unwrap();
    assert_eq!(detalles.len(), 1);
    assert_eq!(detalles[0]["estudiante"], "Ana Uno");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_completo_junta_todos_los_widgets(pool: PgPool) {
    let a = create_student(&pool, "Ana", "Uno").await;
    seed_pago(&pool, "pago_inscripcion", a.id, "100.00", "100.00", "2024-01-15T12:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert!(json["incomeByDay"].is_array());
    assert!(json["incomeByMonth"].is_array());
    assert!(json["incomeByType"].is_array());
    assert!(json["studentsByType"].is_array());
    assert!(json["pendingPayments"].is_array());
    assert!(json["totalMora"].is_string());
    assert!(json["incomeByPaymentMethod"].is_array());
    // Total histórico, sin importar el rango pedido.
    assert_eq!(json["monthlyIncome"], "100.00");
}
