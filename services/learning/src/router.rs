use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use emmaus_core::health::{healthz, readyz};
use emmaus_core::middleware::request_id_layer;

use crate::handlers::{
    diocese::{create_diocese, delete_diocese, get_dioceses, update_diocese},
    group::{
        assign_member, create_group, delete_group, get_groups, remove_member, update_group,
    },
    manager::replace_managers,
    progress::{
        get_progress, mark_video, reset_progress, upsert_question_detail, upsert_unit_progress,
    },
    region::{create_region, delete_region, get_regions, update_region},
    user::{create_user, get_me, update_password, update_role},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Dioceses
        .route("/dioceses", get(get_dioceses))
        .route("/dioceses", post(create_diocese))
        .route("/dioceses/{id}", patch(update_diocese))
        .route("/dioceses/{id}", delete(delete_diocese))
        // Regions
        .route("/regions", get(get_regions))
        .route("/regions", post(create_region))
        .route("/regions/{id}", patch(update_region))
        .route("/regions/{id}", delete(delete_region))
        // Groups
        .route("/groups", get(get_groups))
        .route("/groups", post(create_group))
        .route("/groups/{id}", patch(update_group))
        .route("/groups/{id}", delete(delete_group))
        .route("/groups/{id}/users", post(assign_member))
        .route("/groups/{id}/users", delete(remove_member))
        // Managers
        .route("/managers", patch(replace_managers))
        // Users
        .route("/users", post(create_user))
        .route("/users/@me", get(get_me))
        .route("/users/{id}/role", patch(update_role))
        .route("/users/{id}/password", patch(update_password))
        // Progress
        .route("/users/{id}/progress", get(get_progress))
        .route("/users/{id}/progress", patch(upsert_unit_progress))
        .route("/users/{id}/progress", delete(reset_progress))
        .route("/progress/video", post(mark_video))
        .route("/progress/quiz/details", post(upsert_question_detail))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
