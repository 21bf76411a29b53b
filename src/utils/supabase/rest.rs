use super::{Client, Connector, Error, Filter, User};
use crate::types::SupabaseContext;
use async_trait::async_trait;
use reqwest::{header, RequestBuilder, StatusCode};
use serde_json::Value;

/// Talks to a Supabase project over its HTTP APIs (GoTrue for auth,
/// PostgREST for tables).
#[derive(Clone, Default)]
pub struct RestConnector {
    http: reqwest::Client,
}

impl RestConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Connector for RestConnector {
    fn connect(&self, supabase: &SupabaseContext, authorization: &str) -> Box<dyn Client> {
        Box::new(RestClient {
            http: self.http.clone(),
            url: supabase.url.trim_end_matches('/').to_string(),
            anon_key: supabase.anon_key.clone(),
            authorization: authorization.to_string(),
        })
    }
}

struct RestClient {
    http: reqwest::Client,
    url: String,
    anon_key: String,
    authorization: String,
}

impl RestClient {
    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.anon_key)
            .header(header::AUTHORIZATION, &self.authorization)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    async fn fetch_rows(&self, req: RequestBuilder) -> Result<Vec<Value>, Error> {
        let res = self.authorize(req).send().await.map_err(|err| {
            tracing::error!("Failed to reach the Supabase REST API: {}", err);
            Error::Transport(err.to_string())
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            tracing::error!("Failed to read the Supabase REST response: {}", err);
            Error::Transport(err.to_string())
        })?;

        if !status.is_success() {
            tracing::error!("Supabase REST API returned {}: {}", status, body);
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str::<Vec<Value>>(&body).map_err(|err| {
            tracing::error!("Failed to deserialize Supabase rows: {}", err);
            Error::Decode(err.to_string())
        })
    }
}

#[async_trait]
impl Client for RestClient {
    async fn verify_token(&self) -> Result<Option<User>, Error> {
        let res = self
            .authorize(self.http.get(format!("{}/auth/v1/user", self.url)))
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Failed to reach the Supabase auth API: {}", err);
                Error::Transport(err.to_string())
            })?;

        let status = res.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::debug!("Supabase auth rejected the token with {}", status);
            return Ok(None);
        }

        let body = res
            .text()
            .await
            .map_err(|err| Error::Transport(err.to_string()))?;

        if !status.is_success() {
            tracing::error!("Supabase auth API returned {}: {}", status, body);
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        match serde_json::from_str::<Option<User>>(&body) {
            Ok(user) => Ok(user),
            Err(err) => {
                tracing::error!("Failed to deserialize Supabase user: {}", err);
                Err(Error::Decode(err.to_string()))
            }
        }
    }

    async fn select_all(&self, table: &str) -> Result<Vec<Value>, Error> {
        self.fetch_rows(
            self.http
                .get(self.table_url(table))
                .query(&[("select", "*")]),
        )
        .await
    }

    async fn delete_where(&self, table: &str, filter: &Filter) -> Result<Vec<Value>, Error> {
        self.fetch_rows(
            self.http
                .delete(self.table_url(table))
                .query(&filter.to_query())
                .header("Prefer", "return=representation"),
        )
        .await
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}
