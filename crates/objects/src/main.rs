mod app;
#[cfg(feature = "dynamodb")]
mod aws;
mod config;
mod export;
mod handlers;
#[cfg(feature = "lambda")]
mod lambda;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use objects_core::storage::ObjectStore;

use crate::{
    app::create_app,
    config::{ExportConfig, StorageConfig},
    export::ExportJob,
    state::AppState,
};

/// Objects - CRUD and summary-export handlers over a single item table
#[derive(Parser, Debug)]
#[command(name = "objects")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the handlers over HTTP
    Serve {
        /// Host address to bind the server to
        #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value = "3000", env = "PORT")]
        port: u16,
    },
    /// Export the table summary once and exit
    Export,
    /// Run one handler on the AWS Lambda runtime
    #[cfg(feature = "lambda")]
    Lambda {
        #[arg(value_enum)]
        handler: lambda::LambdaHandler,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    match cli.command {
        Command::Serve { host, port } => serve(&host, port).await,
        Command::Export => {
            let job = export_job().await?;
            job.run().await;
            Ok(())
        }
        #[cfg(feature = "lambda")]
        Command::Lambda { handler } => run_lambda(handler).await,
    }
}

/// Initialize the tracing subscriber.
///
/// `LOG_FORMAT=json` switches to one JSON object per line.
fn init_tracing() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    let (json_layer, text_layer) = if json {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "objects=debug,tower_http=debug".into()),
        )
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn serve(host: &str, port: u16) -> Result<()> {
    let config = StorageConfig::from_env()?;
    let state = AppState::new(&config).await?;

    let app = create_app(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the export from the environment.
async fn export_job() -> Result<ExportJob> {
    let storage_config = StorageConfig::from_env()?;
    let export_config = ExportConfig::from_env()?;

    let state = AppState::new(&storage_config).await?;
    let object_store = object_store(&export_config).await;

    Ok(ExportJob::new(state.repository, object_store, export_config))
}

#[cfg(feature = "inmemory")]
async fn object_store(config: &ExportConfig) -> Arc<dyn ObjectStore> {
    tracing::info!(root = %config.object_store_root.display(), "Using filesystem object store");
    Arc::new(storage::object_store::FilesystemObjectStore::new(
        config.object_store_root.clone(),
    ))
}

#[cfg(feature = "dynamodb")]
async fn object_store(_config: &ExportConfig) -> Arc<dyn ObjectStore> {
    let sdk_config = aws::load_config().await;
    tracing::info!("Using S3 object store");
    Arc::new(storage::object_store::S3ObjectStore::new(
        aws_sdk_s3::Client::new(&sdk_config),
    ))
}

#[cfg(feature = "lambda")]
async fn run_lambda(handler: lambda::LambdaHandler) -> Result<()> {
    let result = match handler.request_handler() {
        Some(kind) => {
            let config = StorageConfig::from_env()?;
            let state = AppState::new(&config).await?;
            lambda::serve_requests(kind, state).await
        }
        None => lambda::serve_export(Arc::new(export_job().await?)).await,
    };

    result.map_err(|e| anyhow::anyhow!(e))
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
