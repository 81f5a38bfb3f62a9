//! The navigation surface.
//!
//! Every navigable destination is a [`Route`]. Paths mirror the web client's
//! URL space; unmatched paths resolve to `Home`.

use std::fmt;

/// Social placeholder destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Facebook,
    X,
    LinkedIn,
}

impl SocialNetwork {
    pub fn label(self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::X => "X",
            SocialNetwork::LinkedIn => "LinkedIn",
        }
    }
}

/// A navigable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    PrivacyPolicy,
    TermsOfService,
    Contact,
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Social(SocialNetwork),
    Profile,
    Query,
    Rating,
    Admin,
}

/// Every route, in header/palette order.
pub const ALL_ROUTES: &[Route] = &[
    Route::Home,
    Route::About,
    Route::Contact,
    Route::Login,
    Route::Register,
    Route::ForgotPassword,
    Route::ResetPassword,
    Route::Profile,
    Route::Query,
    Route::Rating,
    Route::Admin,
    Route::PrivacyPolicy,
    Route::TermsOfService,
    Route::Social(SocialNetwork::Facebook),
    Route::Social(SocialNetwork::X),
    Route::Social(SocialNetwork::LinkedIn),
];

impl Route {
    /// Resolves a path to a route. Unmatched paths go home.
    pub fn parse(path: &str) -> Route {
        match path.trim().trim_end_matches('/') {
            "" | "/" => Route::Home,
            "/about" => Route::About,
            "/privacy-policy" => Route::PrivacyPolicy,
            "/terms-of-service" => Route::TermsOfService,
            "/contact" => Route::Contact,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/forgot-password" => Route::ForgotPassword,
            "/reset-password" => Route::ResetPassword,
            "/social/facebook" => Route::Social(SocialNetwork::Facebook),
            "/social/x" => Route::Social(SocialNetwork::X),
            "/social/linkedin" => Route::Social(SocialNetwork::LinkedIn),
            "/profile" => Route::Profile,
            "/query" => Route::Query,
            "/rating" => Route::Rating,
            "/admin" => Route::Admin,
            _ => Route::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::PrivacyPolicy => "/privacy-policy",
            Route::TermsOfService => "/terms-of-service",
            Route::Contact => "/contact",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::ForgotPassword => "/forgot-password",
            Route::ResetPassword => "/reset-password",
            Route::Social(SocialNetwork::Facebook) => "/social/facebook",
            Route::Social(SocialNetwork::X) => "/social/x",
            Route::Social(SocialNetwork::LinkedIn) => "/social/linkedin",
            Route::Profile => "/profile",
            Route::Query => "/query",
            Route::Rating => "/rating",
            Route::Admin => "/admin",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About Us",
            Route::PrivacyPolicy => "Privacy Policy",
            Route::TermsOfService => "Terms of Service",
            Route::Contact => "Contact",
            Route::Login => "Sign In",
            Route::Register => "Create Account",
            Route::ForgotPassword => "Forgot Password",
            Route::ResetPassword => "Reset Password",
            Route::Social(SocialNetwork::Facebook) => "Facebook",
            Route::Social(SocialNetwork::X) => "X",
            Route::Social(SocialNetwork::LinkedIn) => "LinkedIn",
            Route::Profile => "Your Profile",
            Route::Query => "Ask an Advisor",
            Route::Rating => "Rate Us",
            Route::Admin => "Admin Dashboard",
        }
    }

    /// Whether this destination requires a signed-in visitor.
    pub fn is_protected(self) -> bool {
        matches!(
            self,
            Route::Profile | Route::Query | Route::Rating | Route::Admin
        )
    }

    /// Whether this destination additionally requires the admin role.
    pub fn requires_admin(self) -> bool {
        matches!(self, Route::Admin)
    }

    /// Browse-mode shortcut key shown in the footer, if any.
    pub fn browse_key(self) -> Option<char> {
        match self {
            Route::Home => Some('h'),
            Route::About => Some('a'),
            Route::Contact => Some('c'),
            Route::Login => Some('l'),
            Route::Register => Some('r'),
            Route::Profile => Some('p'),
            Route::Query => Some('y'),
            Route::Rating => Some('t'),
            Route::Admin => Some('d'),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_round_trip() {
        for route in ALL_ROUTES {
            assert_eq!(Route::parse(route.path()), *route);
        }
    }

    #[test]
    fn unmatched_paths_resolve_home() {
        assert_eq!(Route::parse("/no-such-page"), Route::Home);
        assert_eq!(Route::parse("/admin/extra"), Route::Home);
        assert_eq!(Route::parse("garbage"), Route::Home);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/"), Route::Home);
    }

    #[test]
    fn protection_flags() {
        assert!(Route::Admin.is_protected());
        assert!(Route::Admin.requires_admin());
        assert!(Route::Profile.is_protected());
        assert!(!Route::Profile.requires_admin());
        assert!(!Route::Contact.is_protected());
    }
}
