pub mod auth;
pub mod initialization;
pub mod middleware;
pub mod tracing;
pub mod users;
