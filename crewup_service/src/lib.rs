/*!
CrewUp Service

The HTTP surface of CrewUp: a feed of projects looking for collaborators,
project and roster management, and the caller's own profile.
*/

#![warn(
    unreachable_pub,
    redundant_lifetimes,
    unsafe_code,
    non_local_definitions,
    clippy::needless_pass_by_value,
    clippy::needless_pass_by_ref_mut
)]

pub mod api;
pub mod config;
pub mod entrypoint;
pub mod model;
