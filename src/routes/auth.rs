use actix_identity::Identity;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::{self, AuthenticatedUser};
use crate::forms::auth::{SignInForm, SignUpForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, auth as auth_service};

#[get("/auth/signin")]
pub async fn show_signin(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/");
    }
    let context = base_context(&flash_messages, None, "signin");
    render_template(&tera, "auth/signin.html", &context)
}

#[post("/auth/signin")]
pub async fn signin(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SignInForm>,
) -> impl Responder {
    match auth_service::authenticate(repo.get_ref(), form) {
        Ok(identity) => {
            if let Err(err) = auth::login(&request, &identity) {
                log::error!("Failed to establish a session: {err}");
                return HttpResponse::InternalServerError().finish();
            }
            redirect("/")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Invalid email or password.").send();
            redirect("/auth/signin")
        }
        Err(err) => {
            log::error!("Failed to sign in: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/auth/signup")]
pub async fn show_signup(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/");
    }
    let context = base_context(&flash_messages, None, "signup");
    render_template(&tera, "auth/signup.html", &context)
}

#[post("/auth/signup")]
pub async fn signup(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SignUpForm>,
) -> impl Responder {
    match auth_service::register_user(repo.get_ref(), form) {
        Ok(identity) => {
            if let Err(err) = auth::login(&request, &identity) {
                log::error!("Failed to establish a session: {err}");
                return HttpResponse::InternalServerError().finish();
            }
            FlashMessage::success("Welcome aboard!").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/auth/signup")
        }
        Err(err) => {
            log::error!("Failed to sign up: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/auth/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    redirect("/")
}
