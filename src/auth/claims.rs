//! Role-claim normalization
//!
//! Converts an arbitrarily-shaped role claim into a canonical list of
//! lower-cased, trimmed role names. A claim with no resolvable role
//! normalizes to the single guest role; the function is total and the
//! result is never empty.

use super::session::{RoleClaim, RoleClaimEntry, RoleDescriptor};

/// Role assigned when a claim yields no resolvable role name
pub const GUEST_ROLE: &str = "guest";

/// Normalize a role claim into a non-empty list of canonical role names.
pub fn normalize_claim(claim: &RoleClaim) -> Vec<String> {
    let mut roles: Vec<String> = match claim {
        RoleClaim::List(entries) => entries.iter().filter_map(entry_role).collect(),
        RoleClaim::Name(name) => vec![canonical(name)],
        RoleClaim::Descriptor(descriptor) => descriptor
            .name
            .as_deref()
            .or(descriptor.role.as_deref())
            .or(descriptor.kind.as_deref())
            .map(canonical)
            .into_iter()
            .collect(),
        RoleClaim::Absent => Vec::new(),
    };

    roles.retain(|role| !role.is_empty());

    if roles.is_empty() {
        roles.push(GUEST_ROLE.to_string());
    }

    roles
}

/// Role contributed by one list entry, if any.
///
/// List-entry descriptors only consult `name` and `role`; the legacy `type`
/// field is honored for bare descriptor claims alone.
fn entry_role(entry: &RoleClaimEntry) -> Option<String> {
    match entry {
        RoleClaimEntry::Name(name) => Some(canonical(name)),
        RoleClaimEntry::Descriptor(RoleDescriptor { name, role, .. }) => {
            name.as_deref().or(role.as_deref()).map(canonical)
        }
    }
}

fn canonical(role: &str) -> String {
    role.trim().to_lowercase()
}
