pub mod response {
    use crate::utils::response;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        TodosDeleted(usize),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TodosDeleted(count) => response::message(
                    StatusCode::OK,
                    format!("{}개의 오래된 할 일이 삭제되었습니다.", count),
                ),
            }
        }
    }

    pub enum Error {
        FailedToDeleteTodos(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToDeleteTodos(message) => {
                    response::error(StatusCode::INTERNAL_SERVER_ERROR, message)
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
