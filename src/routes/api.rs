use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::repository::DieselRepository;
use crate::services::{ServiceError, main as main_service};

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub city: String,
}

#[get("/api/v1/destinations/{slug}/availability")]
/// Return the availability index for one departure city as JSON.
///
/// An unknown city yields an empty index; an unknown destination is a `404`.
pub async fn api_v1_availability(
    path: web::Path<String>,
    params: web::Query<AvailabilityQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let slug = path.into_inner();
    match main_service::availability_for_city(repo.get_ref(), &slug, &params.city) {
        Ok(index) => HttpResponse::Ok().json(index),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to build availability for {slug}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
