/// Pure permission predicates over already-loaded project state
pub mod access;
/// Contains the models for projects and memberships
pub mod model;
/// Contains the repository and service traits for projects
pub mod project_repo;
/// Contains the service logic for projects
pub mod project_service;
