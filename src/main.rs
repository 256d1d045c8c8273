use std::env;

use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use travelbuddy::db::establish_connection_pool;
use travelbuddy::middleware::RedirectUnauthorized;
use travelbuddy::repository::DieselRepository;
use travelbuddy::routes::admin::{
    add_destination, add_package, delete_destination, delete_package, edit_destination,
    export_bookings, import_destinations, show_add_destination, show_admin, show_bookings,
    show_edit_destination, upload_hero_image,
};
use travelbuddy::routes::api::api_v1_availability;
use travelbuddy::routes::auth::{logout, show_signin, show_signup, signin, signup};
use travelbuddy::routes::bookings::{show_profile, show_register, submit_register};
use travelbuddy::routes::main::{show_destination, show_destinations, show_index};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("travelbuddy.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let domain = env::var("DOMAIN").unwrap_or("localhost".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{domain}")))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .service(show_destinations)
            .service(show_destination)
            .service(api_v1_availability)
            .service(show_signin)
            .service(signin)
            .service(show_signup)
            .service(signup)
            .service(logout)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_register)
                    .service(submit_register)
                    .service(show_profile)
                    .service(show_admin)
                    .service(show_add_destination)
                    .service(add_destination)
                    .service(show_edit_destination)
                    .service(edit_destination)
                    .service(delete_destination)
                    .service(upload_hero_image)
                    .service(add_package)
                    .service(delete_package)
                    .service(import_destinations)
                    .service(show_bookings)
                    .service(export_bookings),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
