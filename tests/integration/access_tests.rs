//! Route guard integration tests
//!
//! Exercises the full path a routed page takes: ingest the collaborator's
//! raw claim, evaluate the route requirement, and derive the redirect.

use caregate::{AccessOutcome, RoleClaim, RouteGuard, RouteRequirement, Session};
use serde_json::json;

use crate::common::fixtures::session_with_role;

#[test]
fn test_raw_claim_to_decision_pipeline() {
    let guard = RouteGuard::default();

    // The identity collaborator hands over a descriptor-shaped claim
    let session = Session::from_raw_claim(true, Some(&json!({ "role": "Staff" })));
    let requirement = RouteRequirement::from_spec("admin,manager");

    assert_eq!(guard.evaluate(&session, &requirement), AccessOutcome::Allow);
}

#[test]
fn test_malformed_claim_degrades_to_guest_and_books_as_customer() {
    let guard = RouteGuard::default();

    // Numbers are not a recognized claim shape
    let session = Session::from_raw_claim(true, Some(&json!(12345)));
    assert_eq!(session.role_claim, RoleClaim::Absent);

    let requirement = RouteRequirement::from_spec("customer");
    assert_eq!(guard.evaluate(&session, &requirement), AccessOutcome::Allow);
}

#[test]
fn test_denied_navigation_payload() {
    let guard = RouteGuard::default();
    let requirement = RouteRequirement::from_spec("Admin, Manager");
    let session = session_with_role("customer");

    let outcome = guard.evaluate(&session, &requirement);
    assert!(!outcome.is_allowed());

    let target = guard.redirect_for(&outcome, &requirement).unwrap();
    assert_eq!(target.route, "/unauthorized");

    let context = target.context.unwrap();
    assert_eq!(context.required_role, "Admin, Manager");
    assert_eq!(context.user_role, "Customer");
}

#[test]
fn test_unauthenticated_session_is_sent_to_login() {
    let guard = RouteGuard::default();
    let requirement = RouteRequirement::from_spec("customer");
    let session = Session::anonymous();

    let outcome = guard.evaluate(&session, &requirement);
    assert_eq!(outcome, AccessOutcome::DenyUnauthenticated);

    let target = guard.redirect_for(&outcome, &requirement).unwrap();
    assert_eq!(target.route, "/login");
    assert!(target.context.is_none());
}

#[test]
fn test_guard_is_stateless_across_evaluations() {
    let guard = RouteGuard::default();
    let dashboard = RouteRequirement::from_spec("admin");
    let customer = RouteRequirement::from_spec("customer");

    // Interleaved evaluations do not affect one another
    assert!(
        guard
            .evaluate(&session_with_role("consultant"), &dashboard)
            .is_allowed()
    );
    assert!(
        !guard
            .evaluate(&session_with_role("consultant"), &customer)
            .is_allowed()
    );
    assert!(
        guard
            .evaluate(&session_with_role("consultant"), &dashboard)
            .is_allowed()
    );
}
