use anyhow::Result;
use assetdesk::api::server::{start_server, AuthSettings};
use assetdesk::store::StoreContext;
use clap::Parser;
use log::{debug, error, LevelFilter};
use std::sync::Arc;

#[derive(Parser)]
struct Args {
    /// Bind address
    #[arg(short = 'e', long, default_value = "0.0.0.0")]
    host: String,

    /// Port
    #[arg(short = 'p', long, default_value = "3000")]
    port: u16,

    /// Gate every resource route behind the bearer token check
    #[arg(long)]
    require_auth: bool,

    /// Login username
    #[arg(long, default_value = "admin")]
    admin_username: String,

    /// Login password
    #[arg(long, default_value = "password")]
    admin_password: String,

    /// HS256 signing secret for issued tokens
    #[arg(long, default_value = "change-me")]
    token_secret: String,

    /// Log level
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = match args.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    debug!("Log level: {}", log_level);
    debug!("Auth required: {}", args.require_auth);

    let store_context = Arc::new(StoreContext::seeded());
    let auth = AuthSettings {
        username: args.admin_username,
        password: args.admin_password,
        token_secret: args.token_secret,
    };

    if let Err(err) = start_server(
        &args.host,
        args.port,
        store_context,
        auth,
        args.require_auth,
    )
    .await
    {
        error!("Failed to start server: {}", err);
    }

    Ok(())
}
