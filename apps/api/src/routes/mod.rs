pub mod health;

use axum::{
    routing::{get, put},
    Router,
};

use crate::models::resume::{Education, Experience, Skill};
use crate::resume::handlers;
use crate::resume::store::Section;
use crate::state::AppState;

/// Collection and item routes for one resume section.
fn section_routes<T: Section>(base: &str) -> Router<AppState> {
    Router::new()
        .route(
            base,
            get(handlers::handle_list::<T>).post(handlers::handle_create::<T>),
        )
        .route(
            &format!("{base}/:id"),
            put(handlers::handle_replace::<T>)
                .get(handlers::handle_get::<T>)
                .delete(handlers::handle_delete::<T>),
        )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/test", get(health::hello_handler))
        // Resume API
        .route("/resume/", get(handlers::handle_spellcheck))
        .merge(section_routes::<Experience>("/resume/experience"))
        .merge(section_routes::<Education>("/resume/education"))
        .merge(section_routes::<Skill>("/resume/skill"))
        .route(
            "/resume/experience/:id/suggestions",
            get(handlers::handle_suggestions),
        )
        .with_state(state)
}
