use axum::http::StatusCode;
use axum_test::TestServer;
use crewup_db_migrator::CREWUP_DB_MIGRATIONS;
use crewup_service::model::response::project_detail::ProjectDetailResponse;
use projects::{MemberRole, OwnedAndJoined, Project, ProjectMember, ProjectWithRoster};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{bearer_token, test_app};

async fn create_project(server: &TestServer, token: &str, title: &str) -> ProjectWithRoster {
    let response = server
        .post("/projects")
        .authorization_bearer(token)
        .json(&json!({ "title": title }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_create_project_requires_auth(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let response = server
        .post("/projects")
        .json(&json!({ "title": "No session" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_create_project_rejects_blank_title(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();
    let token = bearer_token(&Uuid::now_v7(), "ada@crewup.dev");

    let response = server
        .post("/projects")
        .authorization_bearer(&token)
        .json(&json!({ "title": "   " }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_feed_filters(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let ada = Uuid::now_v7();
    let grace = Uuid::now_v7();
    let ada_token = bearer_token(&ada, "ada@crewup.dev");
    let grace_token = bearer_token(&grace, "grace@crewup.dev");

    let open = create_project(&server, &ada_token, "Open project").await;
    let closing = create_project(&server, &grace_token, "Closing project").await;

    // grace closes her project
    server
        .patch(&format!("/projects/{}", closing.project.id))
        .authorization_bearer(&grace_token)
        .json(&json!({ "status": "closed" }))
        .await
        .assert_status_ok();

    // Default filter shows only open projects
    let feed: Vec<Project> = server.get("/projects").await.json();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, open.project.id);

    // filter=all shows everything, newest first
    let all: Vec<Project> = server
        .get("/projects")
        .add_query_param("filter", "all")
        .await
        .json();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, closing.project.id);

    // filter=mine only makes sense with a session
    let mine: Vec<Project> = server
        .get("/projects")
        .add_query_param("filter", "mine")
        .authorization_bearer(&ada_token)
        .await
        .json();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, open.project.id);

    let anonymous_mine: Vec<Project> = server
        .get("/projects")
        .add_query_param("filter", "mine")
        .await
        .json();
    assert!(anonymous_mine.is_empty());

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_patch_project_authorization(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let ada_token = bearer_token(&Uuid::now_v7(), "ada@crewup.dev");
    let grace_token = bearer_token(&Uuid::now_v7(), "grace@crewup.dev");

    let created = create_project(&server, &ada_token, "Owned by ada").await;

    // Non-owners may not edit
    server
        .patch(&format!("/projects/{}", created.project.id))
        .authorization_bearer(&grace_token)
        .json(&json!({ "title": "Hijacked" }))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    // A missing project is a 404, not a 403
    server
        .patch(&format!("/projects/{}", Uuid::now_v7()))
        .authorization_bearer(&grace_token)
        .json(&json!({ "title": "Ghost" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    // The owner's patch sticks
    let response = server
        .patch(&format!("/projects/{}", created.project.id))
        .authorization_bearer(&ada_token)
        .json(&json!({ "title": "Renamed", "status": "in_progress" }))
        .await;
    response.assert_status_ok();

    let updated: Project = response.json();
    assert_eq!(updated.title, "Renamed");

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_delete_project_authorization(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let ada_token = bearer_token(&Uuid::now_v7(), "ada@crewup.dev");
    let grace_token = bearer_token(&Uuid::now_v7(), "grace@crewup.dev");

    let created = create_project(&server, &ada_token, "Short lived").await;
    let project_id = created.project.id;

    server
        .delete(&format!("/projects/{project_id}"))
        .authorization_bearer(&grace_token)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    server
        .delete(&format!("/projects/{project_id}"))
        .authorization_bearer(&ada_token)
        .await
        .assert_status_ok();

    server
        .get(&format!("/projects/{project_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_join_project(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let ada = Uuid::now_v7();
    let grace = Uuid::now_v7();
    let ada_token = bearer_token(&ada, "ada@crewup.dev");
    let grace_token = bearer_token(&grace, "grace@crewup.dev");

    let created = create_project(&server, &ada_token, "Joinable").await;
    let project_id = created.project.id;

    let response = server
        .post(&format!("/projects/{project_id}/members"))
        .authorization_bearer(&grace_token)
        .await;
    response.assert_status_ok();

    let membership: ProjectMember = response.json();
    assert_eq!(membership.user_id, grace);
    assert_eq!(membership.role, MemberRole::Member);

    // Joining again is a no-op success returning the same row
    let duplicate: ProjectMember = server
        .post(&format!("/projects/{project_id}/members"))
        .authorization_bearer(&grace_token)
        .await
        .json();
    assert_eq!(duplicate.id, membership.id);

    // The owner is already on the roster
    server
        .post(&format!("/projects/{project_id}/members"))
        .authorization_bearer(&ada_token)
        .await
        .assert_status(StatusCode::CONFLICT);

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_join_closed_project_conflicts(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let ada_token = bearer_token(&Uuid::now_v7(), "ada@crewup.dev");
    let grace_token = bearer_token(&Uuid::now_v7(), "grace@crewup.dev");

    let created = create_project(&server, &ada_token, "Closing soon").await;
    let project_id = created.project.id;

    server
        .patch(&format!("/projects/{project_id}"))
        .authorization_bearer(&ada_token)
        .json(&json!({ "status": "closed" }))
        .await
        .assert_status_ok();

    server
        .post(&format!("/projects/{project_id}/members"))
        .authorization_bearer(&grace_token)
        .await
        .assert_status(StatusCode::CONFLICT);

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_leave_project(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let grace = Uuid::now_v7();
    let ada_token = bearer_token(&Uuid::now_v7(), "ada@crewup.dev");
    let grace_token = bearer_token(&grace, "grace@crewup.dev");

    let created = create_project(&server, &ada_token, "Leavable").await;
    let project_id = created.project.id;

    let first_join: ProjectMember = server
        .post(&format!("/projects/{project_id}/members"))
        .authorization_bearer(&grace_token)
        .await
        .json();

    server
        .delete(&format!("/projects/{project_id}/members/me"))
        .authorization_bearer(&grace_token)
        .await
        .assert_status_ok();

    // Leaving twice conflicts, as does the owner trying to leave
    server
        .delete(&format!("/projects/{project_id}/members/me"))
        .authorization_bearer(&grace_token)
        .await
        .assert_status(StatusCode::CONFLICT);

    server
        .delete(&format!("/projects/{project_id}/members/me"))
        .authorization_bearer(&ada_token)
        .await
        .assert_status(StatusCode::CONFLICT);

    // Rejoining after a leave creates a fresh membership row
    let rejoin_response = server
        .post(&format!("/projects/{project_id}/members"))
        .authorization_bearer(&grace_token)
        .await;
    rejoin_response.assert_status_ok();

    let rejoin: ProjectMember = rejoin_response.json();
    assert_ne!(rejoin.id, first_join.id);

    // The roster holds exactly one row for grace
    let detail: ProjectDetailResponse = server
        .get(&format!("/projects/{project_id}"))
        .await
        .json();
    let grace_rows: Vec<_> = detail
        .members
        .iter()
        .filter(|m| m.membership.user_id == grace)
        .collect();
    assert_eq!(grace_rows.len(), 1);
    assert_eq!(grace_rows[0].membership.id, rejoin.id);

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_my_projects_dedups_owned_from_joined(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let ada_token = bearer_token(&Uuid::now_v7(), "ada@crewup.dev");
    let grace_token = bearer_token(&Uuid::now_v7(), "grace@crewup.dev");

    let adas = create_project(&server, &ada_token, "Ada's project").await;
    let graces = create_project(&server, &grace_token, "Grace's project").await;

    server
        .post(&format!("/projects/{}/members", adas.project.id))
        .authorization_bearer(&grace_token)
        .await
        .assert_status_ok();

    let mine: OwnedAndJoined = server
        .get("/projects/mine")
        .authorization_bearer(&grace_token)
        .await
        .json();

    assert_eq!(mine.owned.len(), 1);
    assert_eq!(mine.owned[0].id, graces.project.id);
    // Grace's own project does not double as a joined project
    assert_eq!(mine.joined.len(), 1);
    assert_eq!(mine.joined[0].id, adas.project.id);

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_project_detail_embeds_profiles(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    let ada = Uuid::now_v7();
    let ada_token = bearer_token(&ada, "ada@crewup.dev");

    // Visit the profile page first so a profile row exists
    server
        .get("/profile")
        .authorization_bearer(&ada_token)
        .await
        .assert_status_ok();

    let created = create_project(&server, &ada_token, "With profile").await;

    let detail: ProjectDetailResponse = server
        .get(&format!("/projects/{}", created.project.id))
        .await
        .json();

    assert_eq!(detail.members.len(), 1);
    let owner = &detail.members[0];
    assert_eq!(owner.membership.user_id, ada);
    assert_eq!(
        owner.profile.as_ref().and_then(|p| p.display_name.as_deref()),
        Some("ada")
    );

    Ok(())
}

#[sqlx::test(migrator = "CREWUP_DB_MIGRATIONS")]
async fn test_invalid_bearer_token_is_rejected(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(test_app(pool)).unwrap();

    // An invalid token is rejected even on public routes rather than being
    // treated as anonymous
    server
        .get("/projects")
        .authorization_bearer("not.a.jwt")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    Ok(())
}
