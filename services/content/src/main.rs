use sea_orm::Database;
use tracing::info;

use digest_content::config::ContentConfig;
use digest_content::infra::llm::HttpAnalyzer;
use digest_content::router::build_router;
use digest_content::state::AppState;

#[tokio::main]
async fn main() {
    digest_core::tracing::init_tracing();

    let config = ContentConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let analyzer = HttpAnalyzer::new(config.provider()).expect("failed to build provider client");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret.clone(),
        token_lifetime_secs: config.access_token_expire_minutes * 60,
        analyzer,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.content_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("content service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
