use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev, error};
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// Minimum accepted password length at signup.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The signed-in visitor, as carried by the identity cookie.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            roles: user.roles.clone(),
        }
    }
}

/// Whether `roles` contains `role`.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

/// Establish an identity session for `user` on the current request.
pub fn login(request: &HttpRequest, user: &AuthenticatedUser) -> Result<(), actix_web::Error> {
    let payload = serde_json::to_string(user).map_err(error::ErrorInternalServerError)?;
    Identity::login(&request.extensions(), payload).map_err(error::ErrorInternalServerError)?;
    Ok(())
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut dev::Payload) -> Self::Future {
        let user = Identity::from_request(req, payload)
            .into_inner()
            .and_then(|identity| identity.id().map_err(error::ErrorUnauthorized))
            .and_then(|json| {
                serde_json::from_str::<AuthenticatedUser>(&json)
                    .map_err(|_| error::ErrorUnauthorized("invalid session"))
            });
        ready(user)
    }
}

/// Hash a plaintext password using Argon2id with a random salt, returning
/// the PHC-formatted hash string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(false)` on mismatch; other errors indicate a corrupt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"));

        assert!(verify_password("correct-horse-battery-staple", &hash).expect("verify"));
        assert!(!verify_password("wrong-password", &hash).expect("verify"));
    }

    #[test]
    fn check_role_matches_exactly() {
        let roles = vec!["user".to_string(), "admin".to_string()];
        assert!(check_role("admin", &roles));
        assert!(!check_role("Admin", &roles));
        assert!(!check_role("admin", &[]));
    }
}
