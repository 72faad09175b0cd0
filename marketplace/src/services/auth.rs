// marketplace/src/services/auth.rs

//! Registration, login, and password hashing/verification.

use argon2::{
  password_hash::{
    rand_core::OsRng, // For generating random salts
    PasswordHash,
    PasswordHasher,   // The main trait for hashing
    PasswordVerifier, // The main trait for verifying
    SaltString,
  },
  Argon2, // The Argon2 algorithm instance
};
use tracing::{debug, error, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{Role, User};
use crate::state::Marketplace;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct RegisterInput {
  pub email: String,
  pub password: String,
  pub roles: Vec<Role>,
}

/// A logged-in user plus an opaque session token. The token is a mock; it
/// is never validated cryptographically and carries no expiry.
#[derive(Debug, Clone)]
pub struct AuthSession {
  pub user: User,
  pub token: String,
}

/// Hashes a plain-text password using Argon2.
#[instrument(name = "auth::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String> {
  if password.is_empty() {
    return Err(AppError::Validation(
      "Password cannot be empty for hashing.".to_string(),
    ));
  }

  let salt = SaltString::generate(&mut OsRng); // Cryptographically secure random salt
  let argon2_hasher = Argon2::default(); // Default Argon2 parameters (recommended)

  match argon2_hasher.hash_password(password.as_bytes(), &salt) {
    Ok(password_hash_obj) => Ok(password_hash_obj.to_string()),
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      Err(AppError::Internal(format!(
        "Password hashing process failed: {}",
        argon_err
      )))
    }
  }
}

/// Verifies a plain-text password against a stored Argon2 hash.
///
/// Returns `Ok(false)` on a clean non-match; an invalid stored hash is an
/// internal error, not an auth failure.
#[instrument(name = "auth::verify_password", skip_all, err(Display))]
pub fn verify_password(hashed_password_str: &str, provided_password: &str) -> Result<bool> {
  if hashed_password_str.is_empty() {
    return Err(AppError::Auth("Invalid stored password format (empty).".to_string()));
  }
  if provided_password.is_empty() {
    return Err(AppError::Auth(
      "Provided password for verification cannot be empty.".to_string(),
    ));
  }

  let parsed_hash = match PasswordHash::new(hashed_password_str) {
    Ok(ph) => ph,
    Err(parse_err) => {
      error!(error = %parse_err, "Failed to parse stored password hash string.");
      return Err(AppError::Internal(format!(
        "Invalid stored password hash format: {}",
        parse_err
      )));
    }
  };

  let argon2_verifier = Argon2::default();
  match argon2_verifier.verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => Ok(false),
    Err(other_argon_err) => {
      error!(error = %other_argon_err, "Argon2 password verification process encountered an error.");
      Err(AppError::Internal(format!(
        "Password verification process failed: {}",
        other_argon_err
      )))
    }
  }
}

/// Creates a user. Emails are unique (application-level scan, case folded by
/// `User::new`); roles must be non-empty.
#[instrument(name = "auth::register", skip(marketplace, input), fields(email = %input.email), err(Display))]
pub fn register(marketplace: &Marketplace, input: RegisterInput) -> Result<User> {
  let email = input.email.trim().to_lowercase();
  if !email.contains('@') {
    return Err(AppError::Validation(format!("'{}' is not a valid email address", email)));
  }
  if input.password.len() < MIN_PASSWORD_LEN {
    return Err(AppError::Validation(format!(
      "Password must be at least {} characters",
      MIN_PASSWORD_LEN
    )));
  }
  if input.roles.is_empty() {
    return Err(AppError::Validation("At least one role is required".to_string()));
  }

  if !marketplace
    .users
    .filtered(&|user: &User| user.email == email)?
    .is_empty()
  {
    return Err(AppError::Validation(format!("Email '{}' is already registered", email)));
  }

  let user = User::new(&email, hash_password(&input.password)?, input.roles);
  marketplace.users.insert(user.clone())?;
  debug!(user_id = %user.id, "user registered");
  Ok(user)
}

/// Verifies credentials and mints an opaque session token.
#[instrument(name = "auth::login", skip(marketplace, password), fields(email = %email), err(Display))]
pub fn login(marketplace: &Marketplace, email: &str, password: &str) -> Result<AuthSession> {
  let email = email.trim().to_lowercase();
  let user = marketplace
    .users
    .filtered(&|user: &User| user.email == email)?
    .into_iter()
    .next()
    .ok_or_else(|| AppError::Auth("Unknown email or wrong password".to_string()))?;

  if !verify_password(&user.password_hash, password)? {
    return Err(AppError::Auth("Unknown email or wrong password".to_string()));
  }

  let token = format!("session_{}_{}", user.id, Uuid::new_v4());
  debug!(user_id = %user.id, "login succeeded");
  Ok(AuthSession { user, token })
}
