use thiserror::Error;

use folio_types::User;

use crate::db::repositories::UserRepository;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Covers unknown usernames and wrong passwords alike, so a failed login
    /// never reveals which accounts exist
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Check a username/password pair against the stored account.
///
/// Passwords are stored and compared as plain strings; this mirrors the
/// single-admin deployment and must not be treated as a secure scheme.
/// No session or token is issued on success.
pub fn authenticate(users: &UserRepository, username: &str, password: &str) -> Result<User, AuthError> {
    let user = users
        .get_by_username(username)?
        .ok_or(AuthError::InvalidCredentials)?;

    if user.password != password {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}
