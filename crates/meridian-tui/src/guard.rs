//! Route guard.
//!
//! A pure decision function consulted on every navigation to a protected
//! destination. The rendering layer interprets the result; nothing here
//! touches a terminal, which keeps the ordering property unit-testable:
//! while the boot check is outstanding the guard neither renders protected
//! content nor redirects.

use meridian_core::session::Session;

use crate::routes::Route;

/// Outcome of a guard evaluation for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The boot check has not resolved; show the loading indicator and
    /// nothing else. There is no timeout: if the check never resolves the
    /// guard stays here.
    Pending,
    /// Send the visitor somewhere else instead.
    Redirect(Route),
    /// Render the requested destination.
    Allow,
}

/// Decides what to do with a navigation to `route` under `session`.
pub fn decide(session: &Session, route: Route) -> RouteDecision {
    if !route.is_protected() {
        return RouteDecision::Allow;
    }
    if !session.loading_complete() {
        return RouteDecision::Pending;
    }
    if !session.is_authenticated() {
        return RouteDecision::Redirect(Route::Login);
    }
    if route.requires_admin() && !session.role().is_some_and(|role| role.is_admin()) {
        return RouteDecision::Redirect(Route::Home);
    }
    RouteDecision::Allow
}

#[cfg(test)]
mod tests {
    use meridian_core::session::{Identity, Role};

    use super::*;
    use crate::routes::ALL_ROUTES;

    fn member(role: Role) -> Identity {
        Identity {
            id: 1,
            name: "Kim Osei".to_string(),
            email: "kim@example.com".to_string(),
            phone: None,
            role,
        }
    }

    #[test]
    fn pending_session_never_renders_or_redirects() {
        let session = Session::new();
        for route in ALL_ROUTES.iter().filter(|r| r.is_protected()) {
            assert_eq!(decide(&session, *route), RouteDecision::Pending);
        }
    }

    #[test]
    fn pending_session_still_allows_public_routes() {
        let session = Session::new();
        assert_eq!(decide(&session, Route::Home), RouteDecision::Allow);
        assert_eq!(decide(&session, Route::Login), RouteDecision::Allow);
    }

    #[test]
    fn anonymous_visitor_is_sent_to_login() {
        let mut session = Session::new();
        session.complete_initial_check(None);
        for route in ALL_ROUTES.iter().filter(|r| r.is_protected()) {
            assert_eq!(
                decide(&session, *route),
                RouteDecision::Redirect(Route::Login)
            );
        }
    }

    #[test]
    fn regular_member_is_bounced_off_admin() {
        let mut session = Session::new();
        session.complete_initial_check(Some(member(Role::Regular)));
        assert_eq!(
            decide(&session, Route::Admin),
            RouteDecision::Redirect(Route::Home)
        );
    }

    #[test]
    fn regular_member_reaches_member_routes() {
        let mut session = Session::new();
        session.complete_initial_check(Some(member(Role::Regular)));
        assert_eq!(decide(&session, Route::Profile), RouteDecision::Allow);
        assert_eq!(decide(&session, Route::Query), RouteDecision::Allow);
        assert_eq!(decide(&session, Route::Rating), RouteDecision::Allow);
    }

    #[test]
    fn admin_reaches_everything() {
        let mut session = Session::new();
        session.complete_initial_check(Some(member(Role::Admin)));
        for route in ALL_ROUTES {
            assert_eq!(decide(&session, *route), RouteDecision::Allow);
        }
    }

    #[test]
    fn cleared_session_redirects_again() {
        let mut session = Session::new();
        session.complete_initial_check(Some(member(Role::Regular)));
        session.clear();
        assert_eq!(
            decide(&session, Route::Profile),
            RouteDecision::Redirect(Route::Login)
        );
    }
}
