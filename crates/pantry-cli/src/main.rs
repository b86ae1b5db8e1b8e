use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use pantry_api::{dashboard, Accessors};
use pantry_core::{PantryConfig, ResourceKind};
use pantry_panel::{AppState, PanelServer};
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[command(name = "pantry", version, about = "Pantry admin panel CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the admin panel server.
    Serve {
        /// Path to pantry.yaml (defaults to ./pantry.yaml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the backend base URL from the config file
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Run the in-memory mock backend on its own.
    Mock {
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },

    /// Probe the backend: fetch the dashboard counts and print them.
    Check {
        /// Path to pantry.yaml (defaults to ./pantry.yaml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the backend base URL from the config file
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Serve { config, base_url } => run_serve(config.as_deref(), base_url).await?,
        Command::Mock { port } => run_mock(port).await?,
        Command::Check { config, base_url } => run_check(config.as_deref(), base_url).await?,
    }

    Ok(())
}

// -----------------------------
// serve
// -----------------------------

async fn run_serve(config_path: Option<&Path>, base_url: Option<String>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mut api = config.api.clone();
    if let Some(base_url) = base_url {
        api.base_url = base_url;
    }

    if config.use_mock_api || config.features.mock_api {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Starting in-memory mock backend");
        tokio::spawn(async move {
            if let Err(error) = pantry_mock::run(listener).await {
                tracing::error!(%error, "mock backend exited");
            }
        });
        api.base_url = format!("http://{addr}/api");
    }

    tracing::info!(
        backend = %api.base_url,
        environment = %config.environment,
        "Pantry configured"
    );

    let accessors = Accessors::new(&api)?;
    let state = AppState::new(accessors);
    let server = PanelServer::new(config.panel.clone(), state);

    println!(
        "Pantry panel listening on http://{}",
        config.panel.listen_addr()
    );
    server.run().await?;
    Ok(())
}

// -----------------------------
// mock
// -----------------------------

async fn run_mock(port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    let addr = listener.local_addr()?;
    println!("Mock backend listening on http://{addr}/api");
    pantry_mock::run(listener).await?;
    Ok(())
}

// -----------------------------
// check
// -----------------------------

async fn run_check(config_path: Option<&Path>, base_url: Option<String>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mut api = config.api.clone();
    if let Some(base_url) = base_url {
        api.base_url = base_url;
    }

    let accessors = Accessors::new(&api)?;
    let counts = dashboard::load_counts(&accessors).await;

    println!("Backend: {}", api.base_url);
    for kind in ResourceKind::DASHBOARD {
        println!("  {:<16} {}", kind.path_segment(), counts.get(kind));
    }
    Ok(())
}

// -----------------------------
// config loading
// -----------------------------

fn load_config(path: Option<&Path>) -> anyhow::Result<PantryConfig> {
    match path {
        Some(path) => {
            let config = PantryConfig::from_file(path)?;
            tracing::info!(path = %path.display(), "Loaded configuration");
            Ok(config)
        }
        None => {
            let default_path = Path::new("pantry.yaml");
            if default_path.exists() {
                let config = PantryConfig::from_file(default_path)?;
                tracing::info!("Loaded configuration from ./pantry.yaml");
                Ok(config)
            } else {
                tracing::info!("No pantry.yaml found, using defaults");
                Ok(PantryConfig::default())
            }
        }
    }
}
