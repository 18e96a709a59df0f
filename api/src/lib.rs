//! A small community bulletin board: accounts with a nickname and residential
//! college, posts filterable by college, and per-user like toggling, all kept
//! in two JSON files.

pub mod config;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod growth;
pub mod models;
pub mod routes;
pub mod states;
pub mod store;

pub use states::AppState;

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use routes::{growth as growth_routes, health, post as post_routes, user};

/// Builds the full application: JSON API routes, with everything else served
/// from `public_dir`.
pub fn app(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        // Accounts
        .route("/api/signup", post(user::signup))
        .route("/api/login", post(user::login))
        .route("/api/set-profile", post(user::set_profile))
        .route("/api/update-nickname", post(user::update_nickname))
        .route("/api/set-nickname", post(user::set_nickname))
        .route("/api/update-rc", post(user::update_rc))
        // Posts
        .route(
            "/api/posts",
            get(post_routes::get_posts).post(post_routes::create_post),
        )
        .route("/api/posts/like", post(post_routes::toggle_like))
        .route("/api/posts/{id}", get(post_routes::get_post))
        // Growth widget
        .route("/api/growth", post(growth_routes::check_in))
        .route("/api/growth/bonus", post(growth_routes::bonus))
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
