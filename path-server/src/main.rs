use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use path_server::domain::Directions;
use path_server::service::ScheduleService;
use path_server::source::{DocumentSource, FileSource, HttpSource, SourceConfig};
use path_server::timetable::validate_limit;
use path_server::web::{AppState, create_router};

/// Serve PATH train departure times to the watch app.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// HTTP port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Number of departures returned when a request does not say (1-20)
    #[arg(long, default_value_t = 5)]
    limit: usize,

    /// Where the timetable pages are published
    #[arg(long, default_value = path_server::source::DEFAULT_BASE_URL)]
    base_url: String,

    /// Timeout for fetching a timetable page, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Serve timetable pages from `<dir>/<page>.html` instead of the website
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Direction mapping NAME=PAGE; repeat to configure several.
    /// Replaces the built-in JSQ <-> 33rd St directions.
    #[arg(long = "direction", value_name = "NAME=PAGE")]
    directions: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("path_server=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let limit = validate_limit(args.limit)?;
    let directions = if args.directions.is_empty() {
        Directions::default()
    } else {
        Directions::from_mappings(&args.directions)?
    };
    info!(directions = ?directions.names(), limit, "configured");

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    match args.data_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "serving timetables from disk");
            serve(FileSource::new(dir), directions, limit, addr).await
        }
        None => {
            let config = SourceConfig::new()
                .with_base_url(args.base_url)
                .with_timeout(args.timeout_secs);
            info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "serving timetables from the web");
            serve(HttpSource::new(config)?, directions, limit, addr).await
        }
    }
}

async fn serve<S: DocumentSource>(
    source: S,
    directions: Directions,
    limit: usize,
    addr: SocketAddr,
) -> Result<(), Box<dyn Error>> {
    let service = ScheduleService::new(source, directions);
    let app = create_router(AppState::new(service, limit));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "PATH schedule server listening");
    info!("  GET  /p/{{stn}}/{{direction}}/{{time}}/  - next departures");
    info!("  GET  /now/{{stn}}/{{direction}}/         - next departures from now");
    info!("  GET  /p/list/{{direction}}/              - stations");
    info!("  GET  /p/directions/                    - directions");

    axum::serve(listener, app).await?;
    Ok(())
}
