//! Client-side session model.
//!
//! Exactly one [`Session`] exists per running client. It records who the
//! current visitor is (if anyone) and whether the one-time boot check has
//! resolved. All mutation goes through the named operations here; consumers
//! observe the result synchronously on the next render.

use serde::{Deserialize, Serialize};

/// Coarse authorization role reported by the backend.
///
/// Unknown role strings degrade to `Regular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Regular,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Short label for display in the header.
    pub fn label(self) -> &'static str {
        match self {
            Role::Regular => "member",
            Role::Admin => "admin",
        }
    }
}

/// The authenticated visitor as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// The client's record of the currently authenticated visitor, or its absence.
#[derive(Debug, Clone, Default)]
pub struct Session {
    identity: Option<Identity>,
    loading_complete: bool,
}

impl Session {
    /// Fresh boot state: nobody, and the boot check still outstanding.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Whether the one-time boot check has resolved (success or failure).
    pub fn loading_complete(&self) -> bool {
        self.loading_complete
    }

    /// Records the outcome of the boot-time check.
    ///
    /// `loading_complete` latches true on the first call. A later completion
    /// never overwrites an identity that is already established (the check is
    /// not retried automatically, but a duplicate completion must be
    /// harmless).
    pub fn complete_initial_check(&mut self, identity: Option<Identity>) {
        if self.identity.is_none() {
            self.identity = identity;
        }
        self.loading_complete = true;
    }

    /// Installs the identity reported by a successful login.
    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// Replaces stored identity fields after a profile edit, without another
    /// round trip to the session-check endpoint.
    pub fn update_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// Clears the identity. Logout is locally authoritative: this runs
    /// regardless of whether the backend call succeeded. Also used when a
    /// protected call comes back unauthorized.
    pub fn clear(&mut self) {
        self.identity = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(role: Role) -> Identity {
        Identity {
            id: 7,
            name: "Dana Reeve".to_string(),
            email: "dana@example.com".to_string(),
            phone: Some("555-0142".to_string()),
            role,
        }
    }

    #[test]
    fn boot_check_failure_means_logged_out() {
        let mut session = Session::new();
        assert!(!session.loading_complete());

        session.complete_initial_check(None);
        assert!(session.loading_complete());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn boot_check_success_installs_identity() {
        let mut session = Session::new();
        session.complete_initial_check(Some(visitor(Role::Regular)));
        assert!(session.loading_complete());
        assert_eq!(session.role(), Some(Role::Regular));
    }

    #[test]
    fn duplicate_check_completion_keeps_established_identity() {
        let mut session = Session::new();
        session.complete_initial_check(Some(visitor(Role::Admin)));

        // Same payload arriving again must change nothing.
        session.complete_initial_check(Some(visitor(Role::Admin)));
        assert_eq!(session.role(), Some(Role::Admin));

        // An identity installed by login also survives a late completion.
        let mut session = Session::new();
        session.set_identity(visitor(Role::Regular));
        session.complete_initial_check(None);
        assert!(session.is_authenticated());
    }

    #[test]
    fn clear_drops_identity_but_not_loading_state() {
        let mut session = Session::new();
        session.complete_initial_check(Some(visitor(Role::Regular)));
        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.loading_complete());
    }

    #[test]
    fn update_identity_replaces_fields_in_place() {
        let mut session = Session::new();
        session.complete_initial_check(Some(visitor(Role::Regular)));

        let mut edited = visitor(Role::Regular);
        edited.name = "Dana R.".to_string();
        edited.phone = None;
        session.update_identity(edited);

        let identity = session.identity().unwrap();
        assert_eq!(identity.name, "Dana R.");
        assert_eq!(identity.phone, None);
    }

    #[test]
    fn unknown_role_degrades_to_regular() {
        let identity: Identity =
            serde_json::from_str(r#"{"id":1,"name":"A","email":"a@b.c","role":"superuser"}"#)
                .unwrap();
        assert_eq!(identity.role, Role::Regular);
    }
}
