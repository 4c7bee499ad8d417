//! Visibility and authorization policy.
//!
//! Both functions are pure and cheap: they are re-evaluated on every call
//! (caching a visible set across mutations would show stale data) and the
//! shell may call `can_mutate` repeatedly before ever attempting a write.

use crate::models::{Identity, LeadRecord, Role};

/// Returns the subset of `leads` the actor may observe, order preserved.
///
/// Admin sees everything; a partner sees exactly the leads it created.
pub fn visible_leads<'a>(identity: &Identity, leads: &'a [LeadRecord]) -> Vec<&'a LeadRecord> {
    match identity.role {
        Role::Admin => leads.iter().collect(),
        Role::Partner => leads
            .iter()
            .filter(|lead| lead.created_by == identity.id)
            .collect(),
    }
}

/// Whether the actor may mutate the given lead (edit, status change,
/// document attach). The lifecycle engine re-checks this on every update,
/// so a shell that skips the check still cannot slip a mutation through.
pub fn can_mutate(identity: &Identity, lead: &LeadRecord) -> bool {
    identity.role == Role::Admin || lead.created_by == identity.id
}
