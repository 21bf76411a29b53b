mod filter;
mod rest;

pub use filter::{Condition, Filter, Operator};
pub use rest::RestConnector;

use crate::types::SupabaseContext;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("{0}")]
    Decode(String),
}

/// The caller identity returned by the auth service for a verified token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// A backend client bound to a single caller credential.
///
/// Every call runs under the caller's authority, never a service identity.
#[async_trait]
pub trait Client: Send + Sync {
    /// Resolves the caller behind the forwarded credential. `Ok(None)` means
    /// the auth service answered but did not recognise the token.
    async fn verify_token(&self) -> Result<Option<User>, Error>;

    async fn select_all(&self, table: &str) -> Result<Vec<Value>, Error>;

    /// Deletes the rows matching `filter` and returns them.
    async fn delete_where(&self, table: &str, filter: &Filter) -> Result<Vec<Value>, Error>;
}

pub trait Connector: Send + Sync {
    fn connect(&self, supabase: &SupabaseContext, authorization: &str) -> Box<dyn Client>;
}
