use anyhow::{Context as _, Result};
use bridges_site::application::{
    ports::{contact::ContactNotifier, markdown::MarkdownProcessor},
    services::ApplicationServices,
};
use bridges_site::config::AppConfig;
use bridges_site::domain::{article::ArticleSource, event::EventSource};
use bridges_site::infrastructure::{
    contact::LogContactNotifier,
    content::{CsvEventSource, FsArticleSource},
    markdown::PulldownMarkdown,
};
use bridges_site::presentation::http::{
    routes::build_router, state::HttpState, views::PageRenderer,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let article_source: Arc<dyn ArticleSource> =
        Arc::new(FsArticleSource::new(config.articles_dir().clone()));
    let event_source: Arc<dyn EventSource> =
        Arc::new(CsvEventSource::new(config.events_file().clone()));
    let markdown: Arc<dyn MarkdownProcessor> = Arc::new(PulldownMarkdown);
    let contact_notifier: Arc<dyn ContactNotifier> = Arc::new(LogContactNotifier);

    if !config.articles_dir().is_dir() {
        tracing::warn!(
            dir = %config.articles_dir().display(),
            "articles directory does not exist; news pages will fail"
        );
    }

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_source),
        Arc::clone(&event_source),
        Arc::clone(&markdown),
        Arc::clone(&contact_notifier),
    ));

    let views = PageRenderer::from_dir(config.templates_dir(), config.site_title())
        .with_context(|| {
            format!(
                "failed to load templates from {}",
                config.templates_dir().display()
            )
        })?;

    let state = HttpState {
        services: Arc::clone(&services),
        views: Arc::new(views),
        home_preview_limit: config.home_preview_limit(),
    };

    let app = build_router(state, config.public_dir());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("server started on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
