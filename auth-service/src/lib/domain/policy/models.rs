/// Path pattern matched against request paths.
///
/// A pattern ending in `/**` matches the prefix itself and any deeper path:
/// `/api/manager/**` matches `/api/manager` and `/api/manager/shifts/3`,
/// but not `/api/managerial`. Any other pattern matches exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    prefix: String,
    recursive: bool,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(prefix) => Self {
                prefix: prefix.to_string(),
                recursive: true,
            },
            None => Self {
                prefix: pattern.to_string(),
                recursive: false,
            },
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        if self.recursive {
            path == self.prefix
                || path
                    .strip_prefix(self.prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        } else {
            path == self.prefix
        }
    }
}

/// Access requirement attached to a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// No authentication required; a resolved identity still passes through.
    Public,
    /// Any authenticated identity.
    Authenticated,
    /// Identity role must be one of the listed labels.
    Roles(Vec<String>),
}

/// One row of the route policy table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub pattern: PathPattern,
    pub access: Access,
}

impl RouteRule {
    pub fn public(pattern: &str) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            access: Access::Public,
        }
    }

    pub fn authenticated(pattern: &str) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            access: Access::Authenticated,
        }
    }

    pub fn roles(pattern: &str, roles: &[&str]) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            access: Access::Roles(roles.iter().map(|r| r.to_string()).collect()),
        }
    }
}

/// Outcome of a policy decision for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Forward the request, with the identity attached when present.
    Permit,
    /// Authentication required and no identity was resolved.
    RequireAuth,
    /// Identity resolved but its role is not allowed here.
    Deny,
}
