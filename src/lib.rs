pub mod auth;
pub mod db;
pub mod domain;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Role required to access the admin console.
pub const ADMIN_ROLE: &str = "admin";

/// Upper bound on travellers per booking, mirroring the registration UI.
pub const MAX_PARTICIPANTS: usize = 6;
