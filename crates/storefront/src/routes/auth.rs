//! Authentication route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use karigar_core::{Email, UserRole};

use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::User;
use crate::services::auth::{AuthService, MIN_PASSWORD_LENGTH, Registration};
use crate::state::AppState;
use crate::validation::{Validate, ValidationErrors, not_blank};

const MAX_USERNAME_LENGTH: usize = 50;

/// Registration form data.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: UserRole,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(not_blank(&self.username), "username", "must not be empty");
        errors.check(
            self.username.chars().count() <= MAX_USERNAME_LENGTH,
            "username",
            format!("must be at most {MAX_USERNAME_LENGTH} characters"),
        );
        if let Err(e) = Email::parse(&self.email) {
            errors.add("email", e.to_string());
        }
        errors.check(
            self.password.chars().count() >= MIN_PASSWORD_LENGTH,
            "password",
            format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
        );
        errors.check(not_blank(&self.first_name), "firstName", "must not be empty");
        errors.check(not_blank(&self.last_name), "lastName", "must not be empty");
        errors.check(
            self.role != UserRole::Admin,
            "role",
            "admin accounts cannot be self-registered",
        );

        errors.into_result()
    }
}

/// Login form data.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Response body for register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
}

/// Create an account.
#[instrument(skip(state))]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    request.validate()?;

    let user = AuthService::new(state.store()).register(Registration {
        username: request.username.trim().to_string(),
        email: request.email,
        password: request.password,
        first_name: request.first_name.trim().to_string(),
        last_name: request.last_name.trim().to_string(),
        role: request.role,
    })?;

    Ok(Json(AuthResponse { user }))
}

/// Log in with email and password.
#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let user = AuthService::new(state.store()).login(&request.email, &request.password)?;
    Ok(Json(AuthResponse { user }))
}
