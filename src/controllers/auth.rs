use std::borrow::Cow;

use anyhow::Context;
use axum::{Json, extract::State};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidateLength, ValidationError, ValidationErrors};

use crate::{
    auth::{encode_jwt, error::AuthError, verify_password_hash},
    db::user::{create_user, get_user_credential_by_email, user_exists},
    error::Error,
    state::SharedAppState,
    telemetry::spawn_blocking_with_tracing,
};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

impl RegisterRequest {
    fn email_errors(&self, errors: &mut ValidationErrors) {
        if !self.email.validate_email() {
            errors.add(
                "email",
                ValidationError::new("email_email")
                    .with_message(Cow::from("Incorrect email format")),
            );
        }
        if !self.email.validate_length(Some(1), Some(100), None) {
            errors.add(
                "email",
                ValidationError::new("email_length")
                    .with_message(Cow::from("Email length must be between 1 and 100")),
            );
        }
    }

    /// Checks the email alone. Runs ahead of the duplicate-user lookup.
    pub fn validate_email_format(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.email_errors(&mut errors);

        if !errors.errors().is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !self.username.validate_length(Some(1), Some(50), None) {
            errors.add(
                "username",
                ValidationError::new("username_length")
                    .with_message(Cow::from("Username length must be between 1 and 50")),
            );
        }

        self.email_errors(&mut errors);

        let password = self.password.expose_secret();
        if !password.validate_length(Some(1), Some(128), None) {
            errors.add(
                "password",
                ValidationError::new("password_length")
                    .with_message(Cow::from("Password length must be between 1 and 128")),
            );
        }

        if !errors.errors().is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    fn bearer(access_token: String) -> Self {
        TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[tracing::instrument(name = "[POST] auth/register", skip_all)]
pub async fn register(
    State(app_state): State<SharedAppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, Error> {
    if !app_state.config.application.allow_registration {
        return Err(Error::Auth(AuthError::RegistrationDisabled));
    }

    request.validate_email_format().map_err(Error::Validation)?;

    if user_exists(&app_state.pool, &request.username, &request.email).await? {
        return Err(Error::Conflict("User already exists".to_string()));
    }

    request.validate().map_err(Error::Validation)?;

    let user = create_user(
        &app_state.pool,
        request.username,
        request.email,
        request.password,
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    let token = encode_jwt(user.id, &app_state.config.jwt)?;

    Ok(Json(TokenResponse::bearer(token)))
}

#[tracing::instrument(name = "[POST] auth/login", skip_all)]
pub async fn login(
    State(app_state): State<SharedAppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, Error> {
    let credential = get_user_credential_by_email(&app_state.pool, &request.email)
        .await?
        .ok_or(Error::Auth(AuthError::IncorrectCredential))?;

    let password_hash = credential.password_hash;
    spawn_blocking_with_tracing(move || verify_password_hash(password_hash, request.password))
        .await
        .context("verify password hash")
        .map_err(Error::Other)?
        .map_err(|_| Error::Auth(AuthError::IncorrectCredential))?;

    let token = encode_jwt(credential.user.id, &app_state.config.jwt)?;

    Ok(Json(TokenResponse::bearer(token)))
}
