//! Handlers for the `/auth` resource (login and session echo).
//!
//! Single-factor username + password against the stored Argon2id hash.
//! There are no sessions or tokens; `/verificar` merely confirms the user
//! id still exists.

use axum::extract::State;
use axum::Json;
use colegio_core::error::CoreError;
use colegio_core::types::DbId;
use colegio_db::models::user::UserInfo;
use colegio_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: UserInfo,
}

/// Request body for `POST /api/auth/verificar`.
#[derive(Debug, Deserialize)]
pub struct VerificarRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<DbId>,
}

/// Session-validity echo.
#[derive(Debug, Serialize)]
pub struct VerificarResponse {
    pub success: bool,
    pub user: UserInfo,
}

/// POST /api/auth/login
///
/// The failure message never says which of the two fields was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if input.username.trim().is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Usuario y contraseña son requeridos".into(),
        )));
    }

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Usuario o contraseña incorrectos".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Usuario o contraseña incorrectos".into(),
        )));
    }

    tracing::info!(user_id = user.id, "Login exitoso");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login exitoso",
        user: user.into(),
    }))
}

/// POST /api/auth/verificar
pub async fn verificar(
    State(state): State<AppState>,
    Json(input): Json<VerificarRequest>,
) -> AppResult<Json<VerificarResponse>> {
    let user_id = input
        .user_id
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("No autenticado".into())))?;

    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Sesión inválida".into())))?;

    Ok(Json(VerificarResponse {
        success: true,
        user: user.into(),
    }))
}
