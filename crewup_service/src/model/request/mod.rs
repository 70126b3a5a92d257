pub mod create_project;
pub mod update_profile;
pub mod update_project;
