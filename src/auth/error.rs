#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Jwt error")]
    JwtError(jsonwebtoken::errors::Error),
    #[error("Password error")]
    PasswordError(argon2::password_hash::Error),
    #[error("Invalid token")]
    Unauthenticated,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid credentials")]
    IncorrectCredential,
    #[error("You do not have permission to access this resource")]
    Forbidden,
    #[error("Registration is disabled")]
    RegistrationDisabled,
}
