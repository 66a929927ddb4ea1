#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact-form notification server

use anyhow::Result;
use clap::Parser;
use cta_notify::{
    domain::notifications::EmailAddress,
    infrastructure::{
        email::{MailerConfig, NotificationConfig, Provider},
        http::{state::AppConfig, HttpServer, HttpServerConfig},
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The mail transport configuration
    #[clap(flatten)]
    pub mailer: MailerConfig,

    /// The notification envelope configuration
    #[clap(flatten)]
    pub notifications: NotificationConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No .env file loaded: {}", e);
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mailer = Provider::from_config(&args.mailer)?;

    let config = AppConfig {
        recipient: EmailAddress::new(&args.notifications.recipient)?,
        sender: EmailAddress::new(&args.notifications.sender)?,
    };

    HttpServer::new(mailer, config, args.server).await?.run().await
}
