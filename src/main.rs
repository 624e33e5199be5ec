use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use biztime::config::ServerConfig;
use biztime::server::{AppState, create_router};
use biztime::store::{SqliteStore, Store};

#[derive(Parser)]
#[command(name = "biztime")]
#[command(about = "Company and invoice tracking API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema
    Init {
        /// Path of the SQLite database file
        #[arg(long, default_value = "./biztime.db")]
        db: PathBuf,

        /// Load demo companies and invoices into an empty database
        #[arg(long)]
        seed: bool,
    },

    /// Start the server
    Serve {
        /// TOML config file; flags below override its values
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long, short)]
        port: Option<u16>,

        /// Path of the SQLite database file
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

fn run_init(db: PathBuf, seed: bool) -> anyhow::Result<()> {
    let store = SqliteStore::new(&db)?;
    store.initialize()?;
    println!("Initialized database at {}", db.display());

    if seed {
        if store.seed()? {
            println!("Loaded demo data");
        } else {
            println!("Database already has companies, skipping demo data");
        }
    }

    Ok(())
}

async fn run_serve(config: ServerConfig) -> anyhow::Result<()> {
    let store = SqliteStore::new(&config.db_path)?;
    store.initialize()?;

    info!("Using database at {}", config.db_path.display());

    let state = Arc::new(AppState::new(Arc::new(store)));
    let app = create_router(state);
    let addr = config.socket_addr()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("biztime=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db, seed } => run_init(db, seed)?,
        Commands::Serve {
            config,
            host,
            port,
            db,
        } => {
            let server_config = match config {
                Some(path) => ServerConfig::from_file(path)?,
                None => ServerConfig::default(),
            };

            run_serve(server_config.with_overrides(host, port, db)).await?;
        }
    }

    Ok(())
}
