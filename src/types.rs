use crate::utils::supabase::{Connector, RestConnector};
use std::env;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT number: {0}")]
    InvalidPort(String),
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct SupabaseContext {
    pub url: String,
    pub anon_key: String,
}

impl SupabaseContext {
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub supabase: SupabaseContext,
    pub connector: Arc<dyn Connector>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub supabase: SupabaseConfig,
}

impl Config {
    /// Reads the process environment once at startup.
    ///
    /// Missing Supabase settings are not an error here: every request that
    /// needs them is answered with a configuration error instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port))?;
        let supabase_url = env::var("SUPABASE_URL").unwrap_or_default();
        let supabase_anon_key = env::var("SUPABASE_ANON_KEY").unwrap_or_default();

        Ok(Self {
            app: AppConfig { host, port },
            supabase: SupabaseConfig {
                url: supabase_url,
                anon_key: supabase_anon_key,
            },
        })
    }

    pub fn with_connector(self, connector: Arc<dyn Connector>) -> Context {
        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            supabase: SupabaseContext {
                url: self.supabase.url,
                anon_key: self.supabase.anon_key,
            },
            connector,
        }
    }
}

pub trait ToContext {
    fn to_context(self) -> Context;
}

impl ToContext for Config {
    fn to_context(self) -> Context {
        self.with_connector(Arc::new(RestConnector::new()))
    }
}
