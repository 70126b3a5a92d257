//! The sole responsibility of this crate is to expose the statically imported sql migrations for the CrewUp database.
//!
//! Keeping the migrations in their own crate lets repository tests in other crates
//! reference them through `#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]` without
//! pulling in anything heavier.
pub static CREWUP_DB_MIGRATIONS: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
