#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::{net::SocketAddr, sync::Arc};

use args::{Args, Command};
use clap::Parser;
use lambda_runtime::{LambdaEvent, service_fn};
use narrate_handler::Handler;
use narrate_storage::S3Store;
use serde_json::Value;
use tts::PollySynthesizer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    narrate_telemetry::init(&args.log_filter, args.log_format)?;

    // Clients are built once and shared by every invocation
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let handler = Handler::new(
        Arc::new(PollySynthesizer::new(aws_sdk_polly::Client::new(&aws_config))),
        Arc::new(S3Store::new(aws_sdk_s3::Client::new(&aws_config))),
    );

    match args.command {
        Some(Command::Serve { listen }) => serve(handler, listen).await,
        None => run_lambda(handler).await,
    }
}

/// Run under the Lambda runtime until the platform stops the process
async fn run_lambda(handler: Handler) -> anyhow::Result<()> {
    tracing::info!("starting narrate lambda");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = handler.clone();
        async move {
            tracing::debug!(request_id = %event.context.request_id, "invocation received");
            Ok::<_, lambda_runtime::Error>(handler.handle_event(event.payload).await)
        }
    }))
    .await
    .map_err(|e| anyhow::anyhow!("lambda runtime failed: {e}"))
}

/// Serve the handler over HTTP for local development
async fn serve(handler: Handler, listen: SocketAddr) -> anyhow::Result<()> {
    let app = narrate_handler::endpoint_router().with_state(handler);
    let listener = tokio::net::TcpListener::bind(listen).await?;

    tracing::info!(%listen, "starting narrate dev server");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("narrate stopped");
    Ok(())
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
