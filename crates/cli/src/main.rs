use clap::Parser;
use homepage_editor_api::AppState;
use homepage_editor_application::services::DocumentSession;
use homepage_editor_domain::CliOverrides;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "homepage-editor")]
#[command(version)]
#[command(about = "Homepage Editor - web editor for a homepage services.yaml")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// YAML document to edit
    #[arg(short = 'f', long, env = "YAML_FILE", value_name = "FILE")]
    document: Option<String>,

    /// Bind host
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Web server port
    #[arg(short = 'p', long, env = "PORT")]
    port: Option<u16>,

    /// Directory served at the site root
    #[arg(long, value_name = "DIR")]
    static_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        document_path: cli.document,
        host: cli.host,
        port: cli.port,
        static_dir: cli.static_dir,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Homepage Editor v{}", env!("CARGO_PKG_VERSION"));

    let repos = di::Repositories::new(&config);
    let session = Arc::new(DocumentSession::new(repos.document.clone()));
    let app_state = AppState::from_session(session);

    let web_addr = config.bind_address()?;

    server::start_web_server(web_addr, app_state, config.server.static_dir.clone()).await?;

    info!("Server shutdown complete");
    Ok(())
}
