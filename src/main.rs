use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todoboard::{api, store::TodoStore};

#[derive(Parser)]
#[command(name = "todoboard")]
#[command(about = "Minimal to-do board for exercising the container deployment pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the to-do board server
    Serve {
        /// Port for the HTTP server
        #[arg(short, long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
    /// Start the standalone greeting server from the earlier pipeline iterations
    Hello {
        /// Port for the HTTP server
        #[arg(short, long, env = "PORT", default_value_t = 5000)]
        port: u16,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "todoboard=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Version string displayed by the greeting page, set by the deployment.
fn app_version() -> String {
    std::env::var("APP_VERSION").unwrap_or_else(|_| "1.0".to_string())
}

async fn serve_board(port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting to-do board on port {}", port);

    let store = TodoStore::seeded();
    let app = api::create_router(store);

    // 0.0.0.0 so the containerized deployment can reach the server
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("To-do board listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn serve_hello(port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting greeting server on port {}", port);

    let app = api::create_hello_router(app_version());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Greeting server listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port }) => serve_board(port).await?,
        Some(Commands::Hello { port }) => serve_hello(port).await?,
        None => {
            // Default: the current iteration, honoring PORT like `serve`
            let port = std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080);
            serve_board(port).await?;
        }
    }

    Ok(())
}
