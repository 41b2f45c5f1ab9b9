use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use handlers::AppState;
use routes::create_router;

use crate::services::entities::RuleBasedRecognizer;

pub mod errors;
pub mod handlers;
pub mod routes;

/// Serve the upload endpoint until the process is terminated.
pub async fn api(out_dir: PathBuf, port: u16) -> anyhow::Result<()> {
    let state = AppState {
        out_dir: Arc::new(out_dir),
        recognizer: RuleBasedRecognizer::shared(),
    };
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    Ok(axum::serve(listener, router.into_make_service()).await?)
}
