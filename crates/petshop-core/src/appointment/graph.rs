//! Transition table and the decision over it.

use crate::error::{PetShopError, Result};

use super::status::{AppointmentStatus, Role};

/// Who may apply a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleScope {
    Any,
    /// Only the listed roles. An empty list admits nobody.
    Only(&'static [Role]),
}

impl RoleScope {
    pub fn permits(self, role: Role) -> bool {
        match self {
            RoleScope::Any => true,
            RoleScope::Only(roles) => roles.contains(&role),
        }
    }
}

/// Outgoing moves from one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    pub from: AppointmentStatus,
    pub to: &'static [AppointmentStatus],
    pub roles: RoleScope,
    pub requires_reason: bool,
}

use AppointmentStatus::*;

const MANAGERS: &[Role] = &[Role::Owner, Role::Admin];

static RULES: [TransitionRule; 7] = [
    TransitionRule {
        from: Scheduled,
        to: &[Confirmed, InProgress, Cancelled, NoShow, Rescheduled],
        roles: RoleScope::Any,
        requires_reason: false,
    },
    TransitionRule {
        from: Confirmed,
        to: &[InProgress, Cancelled, NoShow, Rescheduled],
        roles: RoleScope::Any,
        requires_reason: false,
    },
    TransitionRule {
        from: InProgress,
        to: &[Completed, Cancelled],
        roles: RoleScope::Any,
        requires_reason: false,
    },
    // terminal
    TransitionRule {
        from: Completed,
        to: &[],
        roles: RoleScope::Only(&[]),
        requires_reason: false,
    },
    TransitionRule {
        from: Cancelled,
        to: &[Scheduled],
        roles: RoleScope::Only(MANAGERS),
        requires_reason: true,
    },
    TransitionRule {
        from: NoShow,
        to: &[Scheduled, Rescheduled],
        roles: RoleScope::Only(MANAGERS),
        requires_reason: true,
    },
    TransitionRule {
        from: Rescheduled,
        to: &[Scheduled, Confirmed, Cancelled],
        roles: RoleScope::Any,
        requires_reason: false,
    },
];

/// Rule governing moves out of `from`.
pub fn rule_for(from: AppointmentStatus) -> &'static TransitionRule {
    match from {
        Scheduled => &RULES[0],
        Confirmed => &RULES[1],
        InProgress => &RULES[2],
        Completed => &RULES[3],
        Cancelled => &RULES[4],
        NoShow => &RULES[5],
        Rescheduled => &RULES[6],
    }
}

/// Decide whether `role` may move an appointment from `from` to `to`.
///
/// Checks run in a fixed order: destination, then role, then reason. Only an
/// absent or empty reason counts as missing.
pub fn can_transition(
    from: AppointmentStatus,
    to: AppointmentStatus,
    role: Role,
    reason: Option<&str>,
) -> Result<()> {
    let rule = rule_for(from);

    if !rule.to.contains(&to) {
        tracing::debug!(%from, %to, %role, "transition rejected: not a legal destination");
        return Err(PetShopError::InvalidTransition { from, to });
    }

    if !rule.roles.permits(role) {
        tracing::debug!(%from, %to, %role, "transition rejected: role not permitted");
        return Err(PetShopError::ForbiddenRole { role, from });
    }

    let has_reason = reason.is_some_and(|r| !r.is_empty());
    if rule.requires_reason && !has_reason {
        tracing::debug!(%from, %to, %role, "transition rejected: reason missing");
        return Err(PetShopError::ReasonRequired { from, to });
    }

    Ok(())
}

/// Destinations `role` may move to from `from`, in table order.
pub fn allowed_transitions(from: AppointmentStatus, role: Role) -> Vec<AppointmentStatus> {
    let rule = rule_for(from);
    if !rule.roles.permits(role) {
        return Vec::new();
    }
    rule.to.to_vec()
}
