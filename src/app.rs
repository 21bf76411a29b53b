use crate::{modules, types::Context, utils::response};
use axum::{middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = Router::new()
            .merge(modules::get_router())
            .with_state(ctx.clone())
            .layer(CatchPanicLayer::custom(response::handle_panic))
            .layer(middleware::map_response(response::with_cors_headers))
            .layer(trace::TraceLayer::new_for_http());

        Self { ctx, router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let addr = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("App is running on {}", addr);

        axum::serve(listener, self.router).await
    }
}
