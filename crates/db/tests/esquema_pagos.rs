//! Database-level tests for the payment schema: generated columns, unique
//! constraints, and the per-student summary view.

use colegio_core::pagos::TipoPago;
use colegio_db::models::student::CreateStudent;
use colegio_db::repositories::{
    ColegiaturaRepo, DashboardRepo, PagoCategoriaRepo, StudentRepo,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;

async fn seed_student(pool: &PgPool) -> i64 {
    let input = CreateStudent {
        nombre: "Prueba".to_string(),
        apellidos: "Esquema".to_string(),
        grado: Some("9no".to_string()),
        jornada: None,
        modalidad: None,
        tipo_estudiante: None,
        estado: None,
        curso_extra_id: None,
    };
    StudentRepo::create(pool, &input).await.unwrap().id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn monto_pendiente_es_columna_generada(pool: PgPool) {
    let student_id = seed_student(&pool).await;

    let pago = PagoCategoriaRepo::insert(
        &pool,
        TipoPago::Inscripcion,
        student_id,
        dec!(500.00),
        dec!(150.00),
        None,
    )
    .await
    .unwrap();

    assert_eq!(pago.monto_pendiente, dec!(350.00));

    let pago = PagoCategoriaRepo::agregar_abono(
        &pool,
        TipoPago::Inscripcion,
        student_id,
        dec!(350.00),
        None,
    )
    .await
    .unwrap();

    assert_eq!(pago.monto_pendiente, Decimal::ZERO);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn colegiatura_duplicada_viola_la_restriccion(pool: PgPool) {
    let student_id = seed_student(&pool).await;

    ColegiaturaRepo::insert(&pool, student_id, "ENERO", 2025, dec!(350.00), Decimal::ZERO, None)
        .await
        .unwrap();

    // La segunda fila para el mismo (estudiante, mes, anio) la rechaza la
    // base aunque el handler no haya verificado antes.
    let err = ColegiaturaRepo::insert(
        &pool,
        student_id,
        "ENERO",
        2025,
        dec!(350.00),
        Decimal::ZERO,
        None,
    )
    .await
    .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_colegiatura_mes"));
        }
        otro => panic!("se esperaba una violación de unicidad, no {otro:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn total_pagado_incluye_la_mora(pool: PgPool) {
    let student_id = seed_student(&pool).await;

    let pago = ColegiaturaRepo::insert(
        &pool,
        student_id,
        "FEBRERO",
        2025,
        dec!(350.00),
        dec!(30.00),
        None,
    )
    .await
    .unwrap();

    assert_eq!(pago.total_pagado, dec!(380.00));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn la_vista_suma_todas_las_categorias(pool: PgPool) {
    let student_id = seed_student(&pool).await;

    PagoCategoriaRepo::insert(
        &pool,
        TipoPago::Inscripcion,
        student_id,
        dec!(500.00),
        dec!(100.00),
        None,
    )
    .await
    .unwrap();

    PagoCategoriaRepo::insert(
        &pool,
        TipoPago::Uniforme,
        student_id,
        dec!(200.00),
        dec!(200.00),
        None,
    )
    .await
    .unwrap();

    ColegiaturaRepo::insert(&pool, student_id, "ENERO", 2025, dec!(350.00), Decimal::ZERO, None)
        .await
        .unwrap();

    let filas = DashboardRepo::resumen_estudiantes(&pool).await.unwrap();
    assert_eq!(filas.len(), 1);

    let fila = &filas[0];
    assert_eq!(fila.estudiante, "Prueba Esquema");
    // 100 + 200 + 350 pagado; 400 + 0 pendiente.
    assert_eq!(fila.total_pagado, dec!(650.00));
    assert_eq!(fila.total_pendiente, dec!(400.00));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn estudiante_sin_pagos_aparece_en_cero(pool: PgPool) {
    seed_student(&pool).await;

    let filas = DashboardRepo::resumen_estudiantes(&pool).await.unwrap();
    assert_eq!(filas.len(), 1);
    assert_eq!(filas[0].total_pagado, Decimal::ZERO);
    assert_eq!(filas[0].total_pendiente, Decimal::ZERO);
}
