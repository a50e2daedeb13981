use bus_server::config::{BackendConfig, ServerConfig};
use bus_server::planner::SearchConfig;
use bus_server::store::{Backend, FileStore, SupabaseClient};
use bus_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bus_server=info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let backend = match config.backend {
        BackendConfig::Supabase(supabase) => {
            info!(url = %supabase.base_url, "using Supabase backend");
            Backend::Supabase(SupabaseClient::new(supabase).expect("Failed to create Supabase client"))
        }
        BackendConfig::File(path) => {
            info!(path = %path.display(), "using snapshot file backend");
            Backend::File(FileStore::new(path))
        }
    };

    let state = AppState::new(backend, SearchConfig::default());
    let app = create_router(state);

    let addr = config.bind_addr;
    info!("Bus Journey Planner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET /health                 - Health check");
    info!("  GET /api/stops?q=           - Suggest stops");
    info!("  GET /api/stops/:id/routes   - Routes serving a stop");
    info!("  GET /api/search?from=&to=   - Plan a journey");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
