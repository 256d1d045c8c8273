use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::{Deserialize, Deserializer};
use tera::{Context, Tera};

use crate::auth::AuthenticatedUser;

pub mod admin;
pub mod api;
pub mod auth;
pub mod bookings;
pub mod main;

/// Deserialize an optional string field, mapping empty or blank input to
/// `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// `303 See Other` redirect to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn alert_level_to_str(level: Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Base template context: flash messages, the current user and the active
/// navigation item.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&AuthenticatedUser>,
    active_menu: &str,
) -> Context {
    let alerts: Vec<(String, &'static str)> = flash_messages
        .iter()
        .map(|message| {
            (
                message.content().to_string(),
                alert_level_to_str(message.level()),
            )
        })
        .collect();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("active_menu", active_menu);
    context
}

/// Render `template` with `context`, logging render failures as 500s.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
