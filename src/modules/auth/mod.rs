pub mod middleware;
pub mod types;
