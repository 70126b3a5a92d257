#![deny(missing_docs)]
//! This crate contains the domain for handling user profiles.

/// The domain module contains the domain logic for profiles
pub mod domain;

/// The outbound module contains the outbound logic for profiles
pub mod outbound;

pub use domain::model::{Profile, ProfileError, ProfilePatch};
pub use domain::profile_repo::ProfileRepository;
pub use outbound::profile_repo::ProfileRepositoryImpl;
