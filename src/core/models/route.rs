/// Navigable screens of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Users,
    DailyScrum,
    Reports,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Users => "/users",
            Route::DailyScrum => "/daily-scrum",
            Route::Reports => "/reports",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Users => "Users",
            Route::DailyScrum => "Daily Scrum",
            Route::Reports => "Reports",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        [
            Route::Login,
            Route::Dashboard,
            Route::Users,
            Route::DailyScrum,
            Route::Reports,
        ]
        .into_iter()
        .find(|r| r.path() == path)
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Entries shown in the sidebar, in order.
    pub fn menu() -> Vec<Route> {
        vec![Route::Dashboard, Route::Users, Route::DailyScrum, Route::Reports]
    }

    /// Title for the top bar. Paths outside the menu show "Dashboard".
    pub fn heading_for(path: &str) -> &'static str {
        Self::menu()
            .into_iter()
            .find(|r| r.path() == path)
            .unwrap_or(Route::Dashboard)
            .title()
    }
}

/// Where a visitor to `path` ends up. `None` means the route renders as is.
///
/// Protected routes bounce anonymous visitors to the login page, the login
/// page bounces signed-in users to the dashboard, and unknown paths go to the
/// dashboard.
pub fn guard_redirect(path: &str, authenticated: bool) -> Option<Route> {
    match Route::from_path(path) {
        None => Some(Route::Dashboard),
        Some(route) if route.is_protected() && !authenticated => Some(Route::Login),
        Some(Route::Login) if authenticated => Some(Route::Dashboard),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_falls_back_to_dashboard() {
        assert_eq!(Route::heading_for("/users"), "Users");
        assert_eq!(Route::heading_for("/daily-scrum"), "Daily Scrum");
        assert_eq!(Route::heading_for("/nowhere"), "Dashboard");
    }

    #[test]
    fn paths_round_trip() {
        for route in Route::menu() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/login"), Some(Route::Login));
    }
}
