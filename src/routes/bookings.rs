use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AuthenticatedUser;
use crate::forms::bookings::RegisterBookingForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::bookings::RegisterQuery;
use crate::services::{ServiceError, bookings as bookings_service};

#[get("/register")]
pub async fn show_register(
    params: web::Query<RegisterQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match bookings_service::load_register_page(repo.get_ref(), params.0) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "register");
            context.insert("destination", &data.destination);
            context.insert("package", &data.package);
            context.insert("date", &data.date);
            context.insert("participants", &data.participants);
            context.insert("max_participants", &data.max_participants);
            context.insert("genders", &data.genders);
            render_template(&tera, "bookings/register.html", &context)
        }
        // Stale or tampered booking links go back to the landing page.
        Err(ServiceError::NotFound) => redirect("/"),
        Err(err) => {
            log::error!("Failed to load the registration page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/register")]
pub async fn submit_register(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    let form = match RegisterBookingForm::from_urlencoded(&body) {
        Ok(form) => form,
        Err(err) => {
            FlashMessage::error(err.to_string()).send();
            return redirect("/");
        }
    };
    let package_id = form.package.to_string();
    let return_to = serde_html_form::to_string([
        ("destination", form.destination.as_str()),
        ("package", package_id.as_str()),
        ("date", form.date.as_str()),
    ])
    .map(|query| format!("/register?{query}"))
    .unwrap_or_else(|_| "/".to_string());

    match bookings_service::submit_registration(repo.get_ref(), &user, form) {
        Ok(_) => {
            FlashMessage::success("Registration complete! Thank you for booking with us.").send();
            redirect("/profile")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&return_to)
        }
        Err(ServiceError::NotFound) => redirect("/"),
        Err(err) => {
            log::error!("Failed to save a booking: {err}");
            FlashMessage::error("Failed to save your booking. Please try again.").send();
            redirect(&return_to)
        }
    }
}

#[get("/profile")]
pub async fn show_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match bookings_service::load_profile_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "profile");
            context.insert("bookings", &data.bookings);
            render_template(&tera, "bookings/profile.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the profile page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
