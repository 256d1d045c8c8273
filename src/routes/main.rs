use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::main::{DestinationsQuery, TripQuery};
use crate::services::{ServiceError, main as main_service};

#[get("/")]
pub async fn show_index(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match main_service::load_index_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, user.as_ref(), "index");
            context.insert("featured", &data.featured);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the index page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/destinations")]
pub async fn show_destinations(
    params: web::Query<DestinationsQuery>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match main_service::load_destinations_page(repo.get_ref(), params.0) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, user.as_ref(), "destinations");
            context.insert("destinations", &data.destinations);
            context.insert("categories", &data.categories);
            context.insert("category", &data.category);
            context.insert("search", &data.search);
            render_template(&tera, "main/destinations.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list destinations: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/destinations/{slug}")]
pub async fn show_destination(
    path: web::Path<String>,
    params: web::Query<TripQuery>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let slug = path.into_inner();
    match main_service::load_destination_page(repo.get_ref(), &slug, params.0) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, user.as_ref(), "destinations");
            context.insert("destination", &data.destination);
            context.insert("cities", &data.cities);
            context.insert("selection", &data.selection);
            context.insert("availability", &data.availability);
            context.insert("resolved", &data.resolved);
            render_template(&tera, "main/destination.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load destination {slug}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
