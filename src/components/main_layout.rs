use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::models::Route;
use crate::features::auth::use_session;

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let pathname = location.pathname;

    let navigate = use_navigate();
    let logout = move || {
        let route = session.logout();
        navigate(route.path(), Default::default());
    };
    let sidebar_logout = {
        let logout = logout.clone();
        move |_| logout()
    };
    let topbar_logout = move |_| logout();

    view! {
        <div class="layout">
            <nav class="sidebar">
                <div class="sidebar-title">
                    <h2>"Admin Panel"</h2>
                </div>
                <ul class="menu">
                    {Route::menu().into_iter().map(|route| {
                        let path = route.path();
                        view! {
                            <li>
                                <A href=path>
                                    <span
                                        class="menu-item"
                                        class:active=move || pathname.get() == path
                                    >
                                        {route.title()}
                                    </span>
                                </A>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>
                <hr class="divider" />
                <button class="btn-secondary logout-btn" on:click=sidebar_logout>"Logout"</button>
            </nav>

            <main class="main">
                <header class="topbar">
                    <h2>{move || Route::heading_for(&pathname.get())}</h2>
                    <button class="icon-btn" title="Logout" on:click=topbar_logout>"⎋"</button>
                </header>
                <section class="page-content">{children()}</section>
            </main>
        </div>
    }
}
