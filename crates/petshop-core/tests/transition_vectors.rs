//! Transition decision vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use petshop_core::appointment::{can_transition, AppointmentStatus, Role};


#[test]
fn transition_vectors() {
    let vectors = vector_loader::load("transitions.json");
    assert!(!vectors.is_empty());

    for v in vectors {
        let from: AppointmentStatus = v.from.parse().unwrap();
        let to: AppointmentStatus = v.to.parse().unwrap();
        let role: Role = v.role.parse().unwrap();

        let res = can_transition(from, to, role, v.reason.as_deref());

        match v.expect_error {
            Some(err) => {
                let e = res.expect_err("expected error");
                assert_eq!(e.client_code().as_str(), err.code, "vector={}", v.description);
            }
            None => assert!(res.is_ok(), "vector={} got {res:?}", v.description),
        }
    }
}
