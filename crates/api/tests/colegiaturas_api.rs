//! HTTP-level integration tests for tuition payments.
//!
//! Tests pin the month to ENERO (never carries a late fee) so results do
//! not depend on the date the suite runs.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_student, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn registrar_colegiatura_de_enero(pool: PgPool) {
    let estudiante = create_student(&pool, "Lucía", "Morales").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "mes": "enero",
        "monto_colegiatura": "350.00",
        "payment_method_id": 2
    });
    let response = post_json(
        app,
        &format!("/api/pagos/colegiaturas/{}", estudiante.id),
        body,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;

    // El mes se normaliza a mayúsculas y enero nunca lleva mora.
    assert_eq!(json["pago"]["mes"], "ENERO");
    assert_eq!(json["pago"]["mora"], "0.00");
    assert_eq!(json["pago"]["total_pagado"], "350.00");
    assert_eq!(json["metodo_pago"], "Transferencia");

    let boleto = json["numeroBoleto"].as_str().unwrap();
    assert!(boleto.starts_with("COL-"), "boleto: {boleto}");
    assert_eq!(boleto.len(), "COL-2025-123456".len());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mes_duplicado_devuelve_400(pool: PgPool) {
    let estudiante = create_student(&pool, "Lucía", "Morales").await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "mes": "ENERO", "monto_colegiatura": "350.00" });
    let response = post_json(
        app,
        &format!("/api/pagos/colegiaturas/{}", estudiante.id),
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/pagos/colegiaturas/{}", estudiante.id),
        body,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Este mes ya fue pagado");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn verificar_mes_pagado(pool: PgPool) {
    let estudiante = create_student(&pool, "Lucía", "Morales").await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "mes": "ENERO", "monto_colegiatura": "350.00" });
    let response = post_json(
        app,
        &format!("/api/pagos/colegiaturas/{}", estudiante.id),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // El mes consultado en minúsculas también cuenta.
    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        &format!("/api/pagos/colegiaturas/{}/mes/enero", estudiante.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["pagado"], true);
    assert!(json["pago"].is_object());

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/pagos/colegiaturas/{}/mes/MARZO", estudiante.id),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["pagado"], false);
    assert!(json["pago"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn historial_del_anio_en_curso(pool: PgPool) {
    let estudiante = create_student(&pool, "Lucía", "Morales").await;
    let app = common::build_test_app(pool.clone());

    for mes in ["ENERO", "NOVIEMBRE"] {
        let body = serde_json::json!({ "mes": mes, "monto_colegiatura": "350.00" });
        let response = post_json(
            common::build_test_app(pool.clone()),
            &format!("/api/pagos/colegiaturas/{}", estudiante.id),
            body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, &format!("/api/pagos/colegiaturas/{}", estudiante.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn recibo_reconstruye_numero_de_boleto(pool: PgPool) {
    let estudiante = create_student(&pool, "Lucía", "Morales").await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "mes": "ENERO", "monto_colegiatura": "350.00" });
    let response = post_json(
        app,
        &format!("/api/pagos/colegiaturas/{}", estudiante.id),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let creado = body_json(response).await;
    let pago_id = creado["pago"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/pagos/colegiaturas/recibo/{pago_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["estudiante"]["id"], estudiante.id);
    assert!(json["numeroBoleto"].as_str().unwrap().starts_with("COL-"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn recibo_de_pago_inexistente_devuelve_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/pagos/colegiaturas/recibo/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
