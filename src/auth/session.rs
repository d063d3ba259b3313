//! Session and role-claim models
//!
//! The external identity collaborator hands over sessions with role claims
//! in several historical shapes (bare string, list, descriptor object).
//! Those shapes are resolved into the closed [`RoleClaim`] union here, at
//! the ingestion boundary, so the rest of the crate never inspects raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptor-object form of a role claim.
///
/// Field precedence during normalization is `name`, then `role`, then
/// `kind` (wire name `type`); see [`crate::auth::claims`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDescriptor {
    /// Role name
    pub name: Option<String>,
    /// Alternate field some providers use instead of `name`
    pub role: Option<String>,
    /// Legacy field, only consulted for a bare descriptor claim
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl RoleDescriptor {
    /// Descriptor carrying only a `name`
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// One element of a list-shaped role claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleClaimEntry {
    /// Bare role name
    Name(String),
    /// Descriptor object
    Descriptor(RoleDescriptor),
}

/// Raw, untrusted role claim as received from the identity collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleClaim {
    /// No claim supplied
    Absent,
    /// Bare role name
    Name(String),
    /// List of names and/or descriptors
    List(Vec<RoleClaimEntry>),
    /// Single descriptor object
    Descriptor(RoleDescriptor),
}

impl RoleClaim {
    /// Resolve a raw JSON claim into the closed union.
    ///
    /// Unrecognized shapes (numbers, booleans, null) map to `Absent` and
    /// will degrade to the guest role during normalization; this function
    /// never fails.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(name)) => Self::Name(name.clone()),
            Some(Value::Array(items)) => {
                let entries = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(name) => Some(RoleClaimEntry::Name(name.clone())),
                        Value::Object(_) => serde_json::from_value(item.clone())
                            .ok()
                            .map(RoleClaimEntry::Descriptor),
                        _ => None,
                    })
                    .collect();
                Self::List(entries)
            }
            Some(object @ Value::Object(_)) => serde_json::from_value(object.clone())
                .map(Self::Descriptor)
                .unwrap_or(Self::Absent),
            Some(_) => Self::Absent,
        }
    }
}

impl Default for RoleClaim {
    fn default() -> Self {
        Self::Absent
    }
}

/// The requesting actor, as seen by the route guard
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Whether the external collaborator authenticated this session
    pub authenticated: bool,
    /// Raw role claim carried by the session
    pub role_claim: RoleClaim,
}

impl Session {
    /// An unauthenticated session with no claim
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated session carrying the given claim
    pub fn authenticated(role_claim: RoleClaim) -> Self {
        Self {
            authenticated: true,
            role_claim,
        }
    }

    /// Build a session from the collaborator's raw JSON claim payload
    pub fn from_raw_claim(authenticated: bool, claim: Option<&Value>) -> Self {
        Self {
            authenticated,
            role_claim: RoleClaim::from_value(claim),
        }
    }
}

/// Accessor interface for the current session.
///
/// Callers inject an implementation instead of reading ambient global state,
/// which keeps route evaluation a pure function of its inputs.
pub trait SessionProvider: Send + Sync {
    /// The session attached to the current request
    fn current(&self) -> Session;
}
