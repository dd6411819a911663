//! Request identity for the mock auth scheme.

/// The identity attached to a request.
///
/// This is the same for all domains - the auth middleware resolves it once
/// per request and handlers branch on the variant instead of null-checking
/// a user object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// No (valid) session token on the request.
    Unauthenticated,
    /// A mock session. No verified identity stands behind these fields.
    Authenticated { display_name: String, email: String },
}

impl Identity {
    /// Create an authenticated identity.
    pub fn authenticated(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::Authenticated {
            display_name: display_name.into(),
            email: email.into(),
        }
    }

    /// Check if the visitor is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The display name, if authenticated.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Authenticated { display_name, .. } => Some(display_name),
            Self::Unauthenticated => None,
        }
    }

    /// The email, if authenticated.
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Authenticated { email, .. } => Some(email),
            Self::Unauthenticated => None,
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::Unauthenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_has_no_names() {
        let identity = Identity::Unauthenticated;
        assert!(!identity.is_authenticated());
        assert_eq!(identity.display_name(), None);
        assert_eq!(identity.email(), None);
    }

    #[test]
    fn authenticated_exposes_names() {
        let identity = Identity::authenticated("Alex J.", "alex@university.edu");
        assert!(identity.is_authenticated());
        assert_eq!(identity.display_name(), Some("Alex J."));
        assert_eq!(identity.email(), Some("alex@university.edu"));
    }
}
