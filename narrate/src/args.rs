use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use narrate_telemetry::LogFormat;

/// Narrate text-to-speech handler
#[derive(Debug, Parser)]
#[command(name = "narrate", about = "Synthesize text with Polly and store the audio in S3")]
pub struct Args {
    /// Log filter directive (e.g. "info" or "narrate_handler=debug")
    #[arg(long, default_value = "info", env = "NARRATE_LOG_FILTER")]
    pub log_filter: String,

    /// Log output format: text or json
    #[arg(long, default_value = "text", env = "AWS_LAMBDA_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Run a local HTTP server instead of the Lambda runtime
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve `POST /v1/narrate` for local development
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000", env = "NARRATE_LISTEN")]
        listen: SocketAddr,
    },
}
