use sea_orm::Database;
use tracing::info;

use emmaus_learning::config::LearningConfig;
use emmaus_learning::infra::auth::HttpAuthProvider;
use emmaus_learning::router::build_router;
use emmaus_learning::state::AppState;

#[tokio::main]
async fn main() {
    emmaus_core::tracing::init_tracing();

    let config = LearningConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let auth = HttpAuthProvider::new(config.auth_base_url.clone());
    let state = AppState::new(db, auth);

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.learning_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("learning service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
