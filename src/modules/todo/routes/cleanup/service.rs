use super::types::response;
use crate::{modules::todo::repository, utils::supabase::Client};
use chrono::{DateTime, Days, Utc};

pub const RETENTION_DAYS: u64 = 30;

/// Thirty calendar days before `now`.
pub fn cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_days(Days::new(RETENTION_DAYS))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub async fn service(client: &dyn Client, now: DateTime<Utc>) -> response::Response {
    let cutoff = cutoff(now);
    tracing::debug!("Deleting completed todos last updated before {}", cutoff);

    repository::delete_completed_before(client, cutoff)
        .await
        .map(response::Success::TodosDeleted)
        .map_err(|err| response::Error::FailedToDeleteTodos(err.to_string()))
}
