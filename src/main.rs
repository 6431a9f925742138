use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use keyword_preprocessor::{
    config::Config,
    api::routes::create_router,
    keyword_log::KeywordLog,
    tagger::RemoteTagger,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let tagger = RemoteTagger::new(config.tagger_url.clone());
    info!("Noun tagger endpoint: {}", tagger.endpoint());

    let log = KeywordLog::new(config.log_path.clone());
    info!("Appending keyword records to {}", log.path().display());

    let app_state = AppState::new(Arc::new(tagger), log);
    let app = create_router(app_state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.server_addr).await?;
    info!("Listening on {}", config.server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
