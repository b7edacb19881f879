//! Appointment status graph tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use petshop_core::appointment::{
    allowed_transitions, can_transition, AppointmentStatus, Role,
};
use petshop_core::PetShopError;

use AppointmentStatus::*;

#[test]
fn completed_rejects_everything() {
    for to in AppointmentStatus::ALL {
        for role in Role::ALL {
            for reason in [None, Some("because")] {
                let err = can_transition(Completed, to, role, reason).unwrap_err();
                assert_eq!(err, PetShopError::InvalidTransition { from: Completed, to });
            }
        }
    }
}

#[test]
fn reopening_cancelled_needs_manager_and_reason() {
    let err = can_transition(Cancelled, Scheduled, Role::Employee, Some("client called")).unwrap_err();
    assert_eq!(err, PetShopError::ForbiddenRole { role: Role::Employee, from: Cancelled });

    let err = can_transition(Cancelled, Scheduled, Role::Owner, None).unwrap_err();
    assert_eq!(err, PetShopError::ReasonRequired { from: Cancelled, to: Scheduled });

    let err = can_transition(Cancelled, Scheduled, Role::Owner, Some("")).unwrap_err();
    assert_eq!(err.client_code().as_str(), "REASON_REQUIRED");


    can_transition(Cancelled, Scheduled, Role::Owner, Some("client called back")).unwrap();
}

#[test]
fn any_non_empty_reason_is_accepted() {
    can_transition(Cancelled, Scheduled, Role::Admin, Some("   ")).unwrap();
    can_transition(NoShow, Scheduled, Role::Admin, Some("\t")).unwrap();
}

#[test]
fn employee_can_confirm() {
    can_transition(Scheduled, Confirmed, Role::Employee, None).unwrap();
}

#[test]
fn destination_is_checked_before_role() {
    let err = can_transition(Cancelled, Completed, Role::Employee, None).unwrap_err();
    assert_eq!(err, PetShopError::InvalidTransition { from: Cancelled, to: Completed });
}

#[test]
fn same_status_is_not_a_transition() {
    for st in AppointmentStatus::ALL {
        assert!(can_transition(st, st, Role::Owner, Some("x")).is_err(), "{st}");
    }
}

#[test]
fn repeated_calls_agree() {
    let cases = [
        (Scheduled, Confirmed, Role::Employee, None),
        (Cancelled, Scheduled, Role::Owner, None),
        (NoShow, Scheduled, Role::Employee, Some("rebooked")),
        (Completed, Scheduled, Role::Owner, Some("oops")),
    ];
    for (from, to, role, reason) in cases {
        assert_eq!(
            can_transition(from, to, role, reason),
            can_transition(from, to, role, reason)
        );
    }
}

#[test]
fn allowed_transitions_respect_role() {
    assert!(allowed_transitions(Cancelled, Role::Employee).is_empty());
    assert_eq!(allowed_transitions(Cancelled, Role::Admin), vec![Scheduled]);
    assert!(allowed_transitions(Completed, Role::Owner).is_empty());
    assert_eq!(
        allowed_transitions(InProgress, Role::Employee),
        vec![Completed, Cancelled]
    );
}

#[test]
fn allowed_transitions_agree_with_can_transition() {
    for from in AppointmentStatus::ALL {
        for role in Role::ALL {
            let allowed = allowed_transitions(from, role);
            for to in AppointmentStatus::ALL {
                let ok = can_transition(from, to, role, Some("reason")).is_ok();
                assert_eq!(ok, allowed.contains(&to), "{from}->{to} as {role}");
            }
        }
    }
}

#[test]
fn statuses_and_roles_parse() {
    assert_eq!("in_progress".parse::<AppointmentStatus>().unwrap(), InProgress);
    assert_eq!("no_show".parse::<AppointmentStatus>().unwrap(), NoShow);
    assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);

    let err = "archived".parse::<AppointmentStatus>().unwrap_err();
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    assert!("groomer".parse::<Role>().is_err());
}

#[test]
fn error_messages_name_the_statuses() {
    let err = can_transition(InProgress, Scheduled, Role::Owner, None).unwrap_err();
    assert_eq!(err.to_string(), "cannot move an appointment from in_progress to scheduled");
}
