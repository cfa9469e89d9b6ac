use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use crate::components::MainLayout;
use crate::core::config::AppConfig;
use crate::core::models::{self, guard_redirect};
use crate::features::auth::{provide_session, use_session};
use crate::pages::{DailyScrumPage, DashboardPage, LoginPage, ReportsPage, UsersPage};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config.clone());
    provide_session(config);

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path={models::Route::Dashboard.path()} /> }>
                <Route
                    path=path!("/login")
                    view=|| view! { <Guarded route={models::Route::Login}><LoginPage /></Guarded> }
                />
                <Route
                    path=path!("/")
                    view=|| view! {
                        <Guarded route={models::Route::Dashboard}>
                            <MainLayout><DashboardPage /></MainLayout>
                        </Guarded>
                    }
                />
                <Route
                    path=path!("/users")
                    view=|| view! {
                        <Guarded route={models::Route::Users}>
                            <MainLayout><UsersPage /></MainLayout>
                        </Guarded>
                    }
                />
                <Route
                    path=path!("/daily-scrum")
                    view=|| view! {
                        <Guarded route={models::Route::DailyScrum}>
                            <MainLayout><DailyScrumPage /></MainLayout>
                        </Guarded>
                    }
                />
                <Route
                    path=path!("/reports")
                    view=|| view! {
                        <Guarded route={models::Route::Reports}>
                            <MainLayout><ReportsPage /></MainLayout>
                        </Guarded>
                    }
                />
            </Routes>
        </Router>
    }
}

// Renders `children` only when the session may see `route`, else redirects
#[component]
fn Guarded(route: models::Route, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || match guard_redirect(route.path(), session.is_authenticated()) {
        Some(target) => {
            log::debug!("Redirecting {} to {}", route.path(), target.path());
            view! { <Redirect path=target.path() /> }.into_any()
        }
        None => children().into_any(),
    }
}
