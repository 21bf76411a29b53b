use super::types::response::Error;
use crate::types::Context;
use crate::utils::supabase::{Client, User};
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use std::sync::Arc;

/// A verified caller together with a backend client bound to its credential.
pub struct Auth {
    pub user: User,
    pub client: Box<dyn Client>,
}

fn get_authorization_header(parts: &Parts) -> Result<&str, Error> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .filter(|header| !header.is_empty())
        .ok_or(Error::MissingAuthorizationHeader)
}

#[async_trait]
impl FromRequestParts<Arc<Context>> for Auth {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<Context>,
    ) -> Result<Self, Self::Rejection> {
        if !ctx.supabase.is_configured() {
            tracing::error!("SUPABASE_URL or SUPABASE_ANON_KEY is not set");
            return Err(Error::MissingConfiguration);
        }

        let authorization = get_authorization_header(parts)?;
        let client = ctx.connector.connect(&ctx.supabase, authorization);

        match client.verify_token().await {
            Ok(Some(user)) => {
                tracing::debug!("Authenticated user {}", user.id);
                Ok(Self { user, client })
            }
            Ok(None) => Err(Error::InvalidSession),
            Err(err) => {
                tracing::debug!("Token verification failed: {}", err);
                Err(Error::InvalidSession)
            }
        }
    }
}
