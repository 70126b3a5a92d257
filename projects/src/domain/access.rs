//! Pure permission predicates over already-loaded project state.
//!
//! These are the client-side half of the authorization story: the store
//! re-enforces the same rules on every mutation, so callers use these only to
//! avoid issuing doomed requests. `actor` is `None` for anonymous visitors.

use uuid::Uuid;

use crate::domain::model::{Project, ProjectMember, ProjectStatus};

/// Whether the actor owns the project.
pub fn is_owner(actor: Option<&Uuid>, project: &Project) -> bool {
    actor.is_some_and(|id| *id == project.owner_id)
}

/// Whether the actor appears on the roster.
pub fn is_member(actor: Option<&Uuid>, roster: &[ProjectMember]) -> bool {
    actor.is_some_and(|id| roster.iter().any(|m| m.user_id == *id))
}

/// Whether the actor may join: authenticated, not the owner, not already a
/// member, and the project is still open.
pub fn can_join(actor: Option<&Uuid>, project: &Project, roster: &[ProjectMember]) -> bool {
    actor.is_some()
        && !is_owner(actor, project)
        && !is_member(actor, roster)
        && project.status == ProjectStatus::Open
}

/// Whether the actor may leave: authenticated, a member, and not the owner.
/// Owners exit by deleting the project.
pub fn can_leave(actor: Option<&Uuid>, project: &Project, roster: &[ProjectMember]) -> bool {
    actor.is_some() && !is_owner(actor, project) && is_member(actor, roster)
}

/// Whether the actor may edit the project's fields.
pub fn can_edit(actor: Option<&Uuid>, project: &Project) -> bool {
    is_owner(actor, project)
}

/// Whether the actor may delete the project.
pub fn can_delete(actor: Option<&Uuid>, project: &Project) -> bool {
    is_owner(actor, project)
}
