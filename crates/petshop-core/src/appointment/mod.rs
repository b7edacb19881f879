//! Appointment status graph.
//!
//! A static table lists, for each status, where an appointment may move next,
//! which roles may move it, and whether the move must carry a reason. API
//! routes consult it before persisting a status change.

pub mod graph;
pub mod status;

pub use graph::{allowed_transitions, can_transition, rule_for, RoleScope, TransitionRule};
pub use status::{AppointmentStatus, Role};
