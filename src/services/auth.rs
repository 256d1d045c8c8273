use validator::Validate;

use crate::auth::{AuthenticatedUser, hash_password, verify_password};
use crate::domain::user::NewUser;
use crate::forms::auth::{SignInForm, SignUpForm};
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Create a new account and return the identity to sign in with.
pub fn register_user<R>(repo: &R, form: SignUpForm) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader + UserWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let email = form.email.trim().to_lowercase();
    if repo
        .get_user_by_email(&email)
        .map_err(ServiceError::from)?
        .is_some()
    {
        return Err(ServiceError::Form(
            "An account with this email already exists.".to_string(),
        ));
    }

    let password_hash =
        hash_password(&form.password).map_err(|err| ServiceError::Internal(err.to_string()))?;

    let user = repo
        .create_user(&NewUser::new(form.name.trim(), email, password_hash))
        .map_err(ServiceError::from)?;

    Ok(AuthenticatedUser::from(&user))
}

/// Check credentials and return the identity to sign in with.
///
/// Unknown emails and wrong passwords are indistinguishable to the caller.
pub fn authenticate<R>(repo: &R, form: SignInForm) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader + ?Sized,
{
    form.validate().map_err(|_| ServiceError::Unauthorized)?;

    let user = repo
        .get_user_by_email(form.email.trim())
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::Unauthorized)?;

    let matches = verify_password(&form.password, &user.password_hash)
        .map_err(|err| ServiceError::Internal(err.to_string()))?;
    if !matches {
        return Err(ServiceError::Unauthorized);
    }

    Ok(AuthenticatedUser::from(&user))
}
