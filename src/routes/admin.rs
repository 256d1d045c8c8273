use std::path::Path;

use actix_multipart::form::MultipartForm;
use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AuthenticatedUser;
use crate::forms::destinations::{
    AddPackageForm, DestinationForm, ImportDestinationsForm, UploadHeroImageForm,
};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::admin::BookingsQuery;
use crate::services::{ServiceError, admin as admin_service};

/// Where uploaded hero images are stored, below the served assets directory.
const UPLOADS_DIR: &str = "assets/uploads";

fn not_allowed() -> HttpResponse {
    FlashMessage::error("You need administrator access for that.").send();
    redirect("/")
}

#[get("/admin")]
pub async fn show_admin(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match admin_service::load_admin_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "admin");
            context.insert("destinations", &data.destinations);
            context.insert("total_bookings", &data.total_bookings);
            render_template(&tera, "admin/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => not_allowed(),
        Err(err) => {
            log::error!("Failed to load the admin page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/admin/destinations/add")]
pub async fn show_add_destination(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if !crate::auth::check_role(crate::ADMIN_ROLE, &user.roles) {
        return not_allowed();
    }
    let mut context = base_context(&flash_messages, Some(&user), "admin");
    context.insert("destination", &Option::<()>::None);
    render_template(&tera, "admin/destination_form.html", &context)
}

#[post("/admin/destinations/add")]
pub async fn add_destination(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DestinationForm>,
) -> impl Responder {
    match admin_service::create_destination(repo.get_ref(), &user, form) {
        Ok(destination) => {
            FlashMessage::success(format!("Destination `{}` created.", destination.name)).send();
            redirect(&format!("/admin/destinations/{}/edit", destination.id))
        }
        Err(ServiceError::Unauthorized) => not_allowed(),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/admin/destinations/add")
        }
        Err(err) => {
            log::error!("Failed to create a destination: {err}");
            FlashMessage::error("Failed to create the destination.").send();
            redirect("/admin/destinations/add")
        }
    }
}

#[get("/admin/destinations/{id}/edit")]
pub async fn show_edit_destination(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let destination_id = path.into_inner();
    match admin_service::load_destination_for_edit(repo.get_ref(), &user, destination_id) {
        Ok(destination) => {
            let mut context = base_context(&flash_messages, Some(&user), "admin");
            context.insert("destination", &destination);
            render_template(&tera, "admin/destination_form.html", &context)
        }
        Err(ServiceError::Unauthorized) => not_allowed(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load destination {destination_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/admin/destinations/{id}/edit")]
pub async fn edit_destination(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DestinationForm>,
) -> impl Responder {
    let destination_id = path.into_inner();
    let return_to = format!("/admin/destinations/{destination_id}/edit");

    match admin_service::update_destination(repo.get_ref(), &user, destination_id, form) {
        Ok(_) => {
            FlashMessage::success("Destination updated.").send();
            redirect(&return_to)
        }
        Err(ServiceError::Unauthorized) => not_allowed(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&return_to)
        }
        Err(err) => {
            log::error!("Failed to update destination {destination_id}: {err}");
            FlashMessage::error("Failed to update the destination.").send();
            redirect(&return_to)
        }
    }
}

#[post("/admin/destinations/{id}/delete")]
pub async fn delete_destination(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let destination_id = path.into_inner();
    match admin_service::delete_destination(repo.get_ref(), &user, destination_id) {
        Ok(()) => {
            FlashMessage::success("Destination deleted.").send();
            redirect("/admin")
        }
        Err(ServiceError::Unauthorized) => not_allowed(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to delete destination {destination_id}: {err}");
            FlashMessage::error("Failed to delete the destination.").send();
            redirect("/admin")
        }
    }
}

#[post("/admin/destinations/{id}/hero")]
pub async fn upload_hero_image(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<UploadHeroImageForm>,
) -> impl Responder {
    let destination_id = path.into_inner();
    let return_to = format!("/admin/destinations/{destination_id}/edit");

    let extension = form
        .image
        .file_name
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .unwrap_or("jpg")
        .to_ascii_lowercase();
    let file_name = format!("destination-{destination_id}-hero.{extension}");
    let target = Path::new(UPLOADS_DIR).join(&file_name);

    if let Err(err) = std::fs::create_dir_all(UPLOADS_DIR)
        .and_then(|()| std::fs::copy(form.image.file.path(), &target).map(|_| ()))
    {
        log::error!("Failed to store uploaded image: {err}");
        FlashMessage::error("Failed to store the uploaded image.").send();
        return redirect(&return_to);
    }

    let image_url = format!("/{UPLOADS_DIR}/{file_name}");
    match admin_service::set_hero_image(repo.get_ref(), &user, destination_id, &image_url) {
        Ok(()) => {
            FlashMessage::success("Hero image updated.").send();
            redirect(&return_to)
        }
        Err(ServiceError::Unauthorized) => not_allowed(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to record the hero image: {err}");
            FlashMessage::error("Failed to update the hero image.").send();
            redirect(&return_to)
        }
    }
}

#[post("/admin/destinations/{id}/packages/add")]
pub async fn add_package(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddPackageForm>,
) -> impl Responder {
    let destination_id = path.into_inner();
    let return_to = format!("/admin/destinations/{destination_id}/edit");

    match admin_service::add_package(repo.get_ref(), &user, destination_id, form) {
        Ok(package) => {
            FlashMessage::success(format!("Package `{}` added.", package.name)).send();
            redirect(&return_to)
        }
        Err(ServiceError::Unauthorized) => not_allowed(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&return_to)
        }
        Err(err) => {
            log::error!("Failed to add a package to destination {destination_id}: {err}");
            FlashMessage::error("Failed to add the package.").send();
            redirect(&return_to)
        }
    }
}

#[post("/admin/destinations/{id}/packages/{package_id}/delete")]
pub async fn delete_package(
    path: web::Path<(i32, i32)>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (destination_id, package_id) = path.into_inner();
    let return_to = format!("/admin/destinations/{destination_id}/edit");

    match admin_service::delete_package(repo.get_ref(), &user, destination_id, package_id) {
        Ok(()) => {
            FlashMessage::success("Package deleted.").send();
            redirect(&return_to)
        }
        Err(ServiceError::Unauthorized) => not_allowed(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to delete package {package_id}: {err}");
            FlashMessage::error("Failed to delete the package.").send();
            redirect(&return_to)
        }
    }
}

#[post("/admin/destinations/import")]
pub async fn import_destinations(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(mut form): MultipartForm<ImportDestinationsForm>,
) -> impl Responder {
    let docs = match form.parse() {
        Ok(docs) => docs,
        Err(err) => {
            FlashMessage::error(err.to_string()).send();
            return redirect("/admin");
        }
    };

    match admin_service::import_destinations(repo.get_ref(), &user, docs) {
        Ok(outcome) => {
            FlashMessage::success(format!("Imported {} destination(s).", outcome.imported)).send();
            for error in &outcome.errors {
                FlashMessage::warning(format!("Skipped {error}")).send();
            }
            redirect("/admin")
        }
        Err(ServiceError::Unauthorized) => not_allowed(),
        Err(err) => {
            log::error!("Failed to import destinations: {err}");
            FlashMessage::error("Import failed.").send();
            redirect("/admin")
        }
    }
}

#[get("/admin/bookings")]
pub async fn show_bookings(
    params: web::Query<BookingsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match admin_service::load_bookings_page(repo.get_ref(), &user, params.0) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "admin");
            context.insert("bookings", &data.bookings);
            render_template(&tera, "admin/bookings.html", &context)
        }
        Err(ServiceError::Unauthorized) => not_allowed(),
        Err(err) => {
            log::error!("Failed to list bookings: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/admin/bookings/export")]
pub async fn export_bookings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match admin_service::export_bookings_csv(repo.get_ref(), &user) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"bookings.csv\"",
            ))
            .body(bytes),
        Err(ServiceError::Unauthorized) => not_allowed(),
        Err(err) => {
            log::error!("Failed to export bookings: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
