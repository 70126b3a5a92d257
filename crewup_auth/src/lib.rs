pub mod error;
pub mod headers;
pub mod middleware;
pub mod session;

pub type Result<T, E = error::CrewupAuthError> = std::result::Result<T, E>;
