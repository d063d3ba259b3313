//! Parsing and display helpers for the route guard

use std::collections::BTreeSet;

/// Parse a comma-separated role specification into canonical role names
pub(super) fn parse_role_spec(spec: &str) -> BTreeSet<String> {
    spec.split(',')
        .map(|role| role.trim().to_lowercase())
        .filter(|role| !role.is_empty())
        .collect()
}

/// Format roles for user-facing display, e.g. `["admin", "staff"]` ->
/// `"Admin, Staff"`
pub(super) fn display_roles(roles: &[String]) -> String {
    roles
        .iter()
        .map(|role| title_case(role))
        .collect::<Vec<_>>()
        .join(", ")
}

fn title_case(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether the two role sets share at least one member
pub(super) fn intersects<'a, I>(roles: I, other: &BTreeSet<String>) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    roles.into_iter().any(|role| other.contains(role))
}
