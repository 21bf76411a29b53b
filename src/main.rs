use std::sync::Arc;
use todo_stats::{
    app::App,
    types::{Config, ToContext},
};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::from_env()?;
    if config.supabase.url.is_empty() || config.supabase.anon_key.is_empty() {
        tracing::warn!("SUPABASE_URL or SUPABASE_ANON_KEY is not set; requests will fail");
    }

    let app = App::new(Arc::new(config.to_context()));
    app.serve().await?;

    Ok(())
}
