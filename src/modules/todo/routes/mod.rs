mod cleanup;
mod handler;
mod stats;
mod types;

use crate::types::Context;
use axum::routing::{options, MethodRouter, Router};
use std::sync::Arc;

fn endpoint() -> MethodRouter<Arc<Context>> {
    options(handler::preflight).fallback(handler::handler)
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/todo-stats", endpoint())
        .route("/functions/v1/todo-stats", endpoint())
}
