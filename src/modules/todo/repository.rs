use crate::utils::supabase::{self, Client, Filter};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TABLE: &str = "todos";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    UnexpectedError(String),
}

impl From<supabase::Error> for Error {
    fn from(err: supabase::Error) -> Self {
        Self::UnexpectedError(err.to_string())
    }
}

pub const HIGH_PRIORITY: &str = "high";

/// A row of the `todos` table. Columns are kept as raw JSON so rows with
/// unexpected column types still count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Todo {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub is_completed: Value,
    #[serde(default)]
    pub priority: Value,
    #[serde(default)]
    pub updated_at: Value,
}

impl Todo {
    pub fn is_completed(&self) -> bool {
        is_truthy(&self.is_completed)
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority.as_str() == Some(HIGH_PRIORITY)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Completed todos last touched strictly before `cutoff`.
pub fn completed_before(cutoff: DateTime<Utc>) -> Filter {
    Filter::new()
        .eq("is_completed", true)
        .lt("updated_at", cutoff.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub async fn find_all(client: &dyn Client) -> Result<Vec<Todo>, Error> {
    let rows = client.select_all(TABLE).await.map_err(|err| {
        tracing::error!("Error occurred while trying to fetch todos: {}", err);
        Error::from(err)
    })?;

    rows.into_iter()
        .map(|row| {
            serde_json::from_value::<Todo>(row).map_err(|err| {
                tracing::error!("Error occurred while trying to decode a todo: {}", err);
                Error::UnexpectedError(err.to_string())
            })
        })
        .collect()
}

/// Deletes completed todos older than `cutoff`, returning how many went.
pub async fn delete_completed_before(
    client: &dyn Client,
    cutoff: DateTime<Utc>,
) -> Result<usize, Error> {
    client
        .delete_where(TABLE, &completed_before(cutoff))
        .await
        .map(|rows| rows.len())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to delete old todos: {}", err);
            Error::from(err)
        })
}
