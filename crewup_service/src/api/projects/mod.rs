use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::api::context::ApiContext;

pub mod create_project;
pub mod delete_project;
pub mod get_feed;
pub mod get_project;
pub mod join_project;
pub mod leave_project;
pub mod my_projects;
pub mod patch_project;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/",
            get(get_feed::get_feed_handler).post(create_project::create_project_handler),
        )
        .route("/mine", get(my_projects::my_projects_handler))
        .route(
            "/{project_id}",
            get(get_project::get_project_handler)
                .patch(patch_project::patch_project_handler)
                .delete(delete_project::delete_project_handler),
        )
        .route(
            "/{project_id}/members",
            post(join_project::join_project_handler),
        )
        .route(
            "/{project_id}/members/me",
            delete(leave_project::leave_project_handler),
        )
}
