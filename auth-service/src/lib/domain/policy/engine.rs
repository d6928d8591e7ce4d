use crate::domain::identity::models::Identity;
use crate::domain::policy::models::Access;
use crate::domain::policy::models::Decision;
use crate::domain::policy::models::RouteRule;

/// Ordered route policy table.
///
/// Rules are evaluated in declaration order and the first matching pattern
/// wins; the table is never reordered, so narrower patterns must be declared
/// before broader ones. A path matching no rule falls back to requiring an
/// authenticated identity of any role.
///
/// Pure and immutable after construction; safe to share across request
/// handlers without locking.
pub struct RoutePolicy {
    rules: Vec<RouteRule>,
}

impl RoutePolicy {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// Access table for the workforce API surface.
    pub fn workforce() -> Self {
        use crate::domain::identity::models::ROLE_EMPLOYEE;
        use crate::domain::identity::models::ROLE_MANAGER;

        Self::new(vec![
            RouteRule::public("/api/auth/**"),
            RouteRule::public("/api/shift/**"),
            RouteRule::public("/api/employee/**"),
            RouteRule::public("/api/leave/**"),
            RouteRule::public("/api/leaveBalance/**"),
            RouteRule::roles("/api/manager/**", &[ROLE_MANAGER]),
            RouteRule::roles("/api/attendance/**", &[ROLE_EMPLOYEE, ROLE_MANAGER]),
        ])
    }

    /// Decide the outcome for a request path and its resolved identity.
    pub fn decide(&self, identity: Option<&Identity>, path: &str) -> Decision {
        let access = self
            .rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| &rule.access)
            .unwrap_or(&Access::Authenticated);

        match access {
            Access::Public => Decision::Permit,
            Access::Authenticated => match identity {
                Some(_) => Decision::Permit,
                None => Decision::RequireAuth,
            },
            Access::Roles(roles) => match identity {
                None => Decision::RequireAuth,
                // An empty role set degenerates to any-authenticated.
                Some(_) if roles.is_empty() => Decision::Permit,
                Some(identity) if roles.iter().any(|role| *role == identity.role) => {
                    Decision::Permit
                }
                Some(_) => Decision::Deny,
            },
        }
    }
}
