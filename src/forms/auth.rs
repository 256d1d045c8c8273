use serde::Deserialize;
use validator::Validate;

use crate::auth::MIN_PASSWORD_LENGTH;

/// Maximum allowed length for a display name.
const NAME_MAX_LEN: u64 = 128;
const MIN_PASSWORD_LEN_VALIDATOR: u64 = MIN_PASSWORD_LENGTH as u64;

/// Form payload emitted by the signup page.
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = MIN_PASSWORD_LEN_VALIDATOR))]
    pub password: String,
}

/// Form payload emitted by the signin page.
#[derive(Debug, Deserialize, Validate)]
pub struct SignInForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
