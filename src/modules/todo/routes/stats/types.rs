pub mod response {
    use crate::utils::response;
    use axum::{http::StatusCode, response::IntoResponse};
    use serde::Serialize;

    #[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TodoStats {
        pub total: usize,
        pub completed: usize,
        pub pending: usize,
        pub high_priority: usize,
        pub completion_rate: u32,
    }

    pub enum Success {
        Stats(TodoStats),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Stats(stats) => response::data(StatusCode::OK, stats),
            }
        }
    }

    pub enum Error {
        FailedToFetchTodos(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchTodos(message) => {
                    response::error(StatusCode::INTERNAL_SERVER_ERROR, message)
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
