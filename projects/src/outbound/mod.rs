/// Contains the sqlx implementation of the project repository
pub mod project_repo;
