use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::server::create_router;
use crate::state::AppState;

/// Owns the published state and the server lifecycle
pub struct AppController {
    state: AppState,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Serve until the cancel token fires
    pub async fn serve(&self, bind_addr: &str) -> anyhow::Result<()> {
        let listener = TcpListener::bind(bind_addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        let app = create_router(self.state.clone());
        let cancel = self.cancel_token.clone();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move { cancel.cancelled().await })
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Cancelling this token stops [`AppController::serve`]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }
}
