// Planner server entry point
use planner_engine::config::EngineSettings;
use planner_server::services::planner_service::MyPlannerService;
use planner_server::services::PlannerServiceServer;
use planner_server::state::PlannerState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::transport::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = EngineSettings::from_env()?;

    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting market planner server...");
    let addr: SocketAddr = settings.bind_address().parse()?;
    info!("Planner will listen on {}", addr);

    let state = Arc::new(RwLock::new(PlannerState::from_settings(&settings)));
    let planner_service = MyPlannerService::new(state);

    Server::builder()
        .add_service(PlannerServiceServer::new(planner_service))
        .serve(addr)
        .await?;

    Ok(())
}
