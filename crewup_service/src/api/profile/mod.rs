use axum::{Router, routing::get};

use crate::api::context::ApiContext;

pub mod get_profile;
pub mod put_profile;

pub fn router() -> Router<ApiContext> {
    Router::new().route(
        "/",
        get(get_profile::get_profile_handler).put(put_profile::put_profile_handler),
    )
}
