use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use easi_llm::{AnthropicClient, CompletionConfig};
use easi_mail::{ContactMailSettings, ContactRelay, TransportConfig};
use easi_web::config::ServerConfig;
use easi_web::router::build_app_router;
use easi_web::state::{AppState, ChatLimits};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "easi_web=debug,easi_mail=debug,easi_llm=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );

    let mut state = AppState::new(config);

    // --- Mail ---
    match TransportConfig::from_env() {
        Some(transport) => {
            let mailer = easi_mail::build_mailer(&transport).expect("Failed to build mail transport");
            let settings = Arc::new(ContactMailSettings::from_env());
            let relay = ContactRelay::new(mailer, settings);
            tracing::info!(transport = relay.transport_name(), "Contact relay configured");
            state = state.with_contact(relay);
        }
        None => {
            tracing::warn!("No mail transport configured; contact submissions will be refused");
        }
    }

    // --- Chat completions ---
    match CompletionConfig::from_env() {
        Some(completion) => {
            state.chat_limits = ChatLimits::from(&completion);
            let client = AnthropicClient::new(completion).expect("Failed to build completion client");
            tracing::info!(model = %client.config().model, "Chat completions configured");
            state = state.with_completions(Arc::new(client));
        }
        None => {
            tracing::warn!("ANTHROPIC_API_KEY not set; chat requests will fail");
        }
    }

    // --- Router ---
    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
