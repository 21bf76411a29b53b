use super::types::{request, response};
use super::{cleanup, stats};
use crate::modules::auth::middleware::Auth;
use axum::{
    extract::{rejection::QueryRejection, Query},
    response::{IntoResponse, Response},
};
use chrono::Utc;

pub async fn preflight() -> &'static str {
    "ok"
}

pub async fn handler(
    auth: Auth,
    params: Result<Query<request::Params>, QueryRejection>,
) -> Response {
    let params = params.map(|Query(params)| params).unwrap_or_default();

    match params.action() {
        Some(request::Action::Stats) => stats::service::service(auth.client.as_ref())
            .await
            .into_response(),
        Some(request::Action::Cleanup) => {
            cleanup::service::service(auth.client.as_ref(), Utc::now())
                .await
                .into_response()
        }
        None => response::Error::InvalidAction.into_response(),
    }
}
