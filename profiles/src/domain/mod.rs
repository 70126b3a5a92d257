/// Contains the models for profiles
pub mod model;
/// Contains the repository trait for profiles
pub mod profile_repo;
