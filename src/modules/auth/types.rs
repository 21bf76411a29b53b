pub mod response {
    use crate::utils::response;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[derive(Debug, PartialEq, Eq)]
    pub enum Error {
        MissingConfiguration,
        MissingAuthorizationHeader,
        InvalidSession,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingConfiguration => response::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Missing SUPABASE_URL or SUPABASE_ANON_KEY env vars",
                ),
                Self::MissingAuthorizationHeader => response::error(
                    StatusCode::UNAUTHORIZED,
                    "Missing Authorization header",
                ),
                Self::InvalidSession => {
                    response::error(StatusCode::UNAUTHORIZED, "Invalid or expired JWT")
                }
            }
        }
    }
}
