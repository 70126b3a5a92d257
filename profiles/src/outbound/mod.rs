/// Contains the sqlx implementation of the profile repository
pub mod profile_repo;
