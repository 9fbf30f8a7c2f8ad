//! Permission Definitions
//!
//! Simplified RBAC permission lookup. The table is static and immutable;
//! the action required for a request is computed fresh per call, never
//! accumulated in shared state.

/// Wildcard granting every action
pub const ADMIN_GRANTED: &str = "admin_granted";

/// Resources exposed by the API surface
pub const RESOURCES: &[&str] = &[
    "flavors", "sizes", "toppings", "pizzas", "orders", "status", "users", "roles",
];

/// HTTP method of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Permission scope implied by an HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Read,
    Write,
    Update,
    Delete,
}

impl Method {
    /// Scope implied by this method
    pub const fn scope(&self) -> Scope {
        match self {
            Method::Get => Scope::Read,
            Method::Post => Scope::Write,
            Method::Patch => Scope::Update,
            Method::Delete => Scope::Delete,
        }
    }
}

impl Scope {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Scope::Read => "read",
            Scope::Write => "write",
            Scope::Update => "update",
            Scope::Delete => "delete",
        }
    }
}

/// Action string required for a resource/method pair (e.g. `orders_read`)
pub fn required_action(resource: &str, method: Method) -> String {
    format!("{}_{}", resource, method.scope().as_str())
}

/// Whether a role's permission list grants the action for this request
pub fn is_granted(role_permissions: &[String], resource: &str, method: Method) -> bool {
    let action = required_action(resource, method);
    role_permissions
        .iter()
        .any(|permission| permission == ADMIN_GRANTED || *permission == action)
}

/// Default permissions for built-in roles
pub fn get_default_permissions(role_name: &str) -> Vec<String> {
    let permissions: &[&str] = match role_name {
        "admin" => &[ADMIN_GRANTED],
        "customer" => &["orders_read", "orders_write"],
        _ => &[],
    };
    permissions.iter().map(|s| s.to_string()).collect()
}
