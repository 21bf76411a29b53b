pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    pub struct Params {
        pub action: Option<String>,
    }

    pub enum Action {
        Stats,
        Cleanup,
    }

    impl Params {
        pub fn action(&self) -> Option<Action> {
            match self.action.as_deref() {
                Some("stats") => Some(Action::Stats),
                Some("cleanup") => Some(Action::Cleanup),
                _ => None,
            }
        }
    }
}

pub mod response {
    use crate::utils::response;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Error {
        InvalidAction,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidAction => response::error(
                    StatusCode::BAD_REQUEST,
                    "Invalid action. Use ?action=stats or ?action=cleanup",
                ),
            }
        }
    }
}
