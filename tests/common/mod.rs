#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use todo_stats::{
    app::App,
    types::{AppContext, Context, SupabaseContext},
    utils::supabase::{Client, Connector, Error, Filter, User},
};
use tower::ServiceExt;

pub const VALID_TOKEN: &str = "Bearer valid-token";

#[derive(Default)]
pub struct FakeState {
    pub users: HashMap<String, User>,
    pub todos: Vec<Value>,
    pub auth_error: Option<String>,
    pub select_error: Option<String>,
    pub delete_error: Option<String>,
    pub select_panic: Option<String>,
    pub connects: usize,
    pub verifications: usize,
    pub store_calls: usize,
    pub forwarded: Vec<String>,
}

/// An in-memory Supabase stand-in.
#[derive(Clone, Default)]
pub struct FakeConnector {
    pub state: Arc<Mutex<FakeState>>,
}

impl FakeConnector {
    pub fn with_user(token: &str) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().users.insert(
            token.to_string(),
            User {
                id: "6f1c2d0e-user".to_string(),
                email: Some("someone@example.com".to_string()),
                role: Some("authenticated".to_string()),
            },
        );
        fake
    }

    pub fn with_todos(self, todos: Vec<Value>) -> Self {
        self.state.lock().unwrap().todos = todos;
        self
    }

    pub fn todos(&self) -> Vec<Value> {
        self.state.lock().unwrap().todos.clone()
    }
}

struct FakeClient {
    state: Arc<Mutex<FakeState>>,
    authorization: String,
}

impl Connector for FakeConnector {
    fn connect(&self, _: &SupabaseContext, authorization: &str) -> Box<dyn Client> {
        let mut state = self.state.lock().unwrap();
        state.connects += 1;
        state.forwarded.push(authorization.to_string());

        Box::new(FakeClient {
            state: self.state.clone(),
            authorization: authorization.to_string(),
        })
    }
}

#[async_trait]
impl Client for FakeClient {
    async fn verify_token(&self) -> Result<Option<User>, Error> {
        let mut state = self.state.lock().unwrap();
        state.verifications += 1;

        if let Some(message) = state.auth_error.clone() {
            return Err(Error::Api {
                status: 500,
                message,
            });
        }

        Ok(state.users.get(&self.authorization).cloned())
    }

    async fn select_all(&self, _: &str) -> Result<Vec<Value>, Error> {
        let mut state = self.state.lock().unwrap();
        state.store_calls += 1;

        if let Some(message) = state.select_panic.clone() {
            // release the lock so the mutex is not poisoned
            drop(state);
            panic!("{}", message);
        }

        match state.select_error.clone() {
            Some(message) => Err(Error::Api {
                status: 400,
                message,
            }),
            None => Ok(state.todos.clone()),
        }
    }

    async fn delete_where(&self, _: &str, filter: &Filter) -> Result<Vec<Value>, Error> {
        let mut state = self.state.lock().unwrap();
        state.store_calls += 1;

        if let Some(message) = state.delete_error.clone() {
            return Err(Error::Api {
                status: 400,
                message,
            });
        }

        let (deleted, kept) = state
            .todos
            .drain(..)
            .partition::<Vec<_>, _>(|row| filter.matches(row));
        state.todos = kept;

        Ok(deleted)
    }
}

pub fn context(connector: Arc<dyn Connector>, url: &str, anon_key: &str) -> Arc<Context> {
    Arc::new(Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        supabase: SupabaseContext {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        },
        connector,
    })
}

pub fn app(fake: &FakeConnector) -> Router {
    App::new(context(
        Arc::new(fake.clone()),
        "https://project.supabase.co",
        "anon-key",
    ))
    .router()
}

pub fn request(method: Method, uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Every non-preflight response is a JSON envelope with CORS headers.
    pub fn assert_json_envelope(&self) {
        assert_eq!(self.headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(self.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            self.headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "authorization, x-client-info, apikey, content-type"
        );
        assert!(self.json()["success"].is_boolean());
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}
