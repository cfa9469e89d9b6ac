use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use crate::features::auth::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let notice = session.notice();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match session.login(&email.get_untracked(), &password.get_untracked()) {
            Ok(route) => {
                set_error.set(None);
                navigate(
                    route.path(),
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
            Err(e) => {
                log::info!("Login rejected: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Dashboard Login"</h1>

                {move || notice.get().map(|message| view! {
                    <div class="alert alert-success">
                        <span>{message}</span>
                        <button class="alert-close" on:click=move |_| session.dismiss_notice()>"×"</button>
                    </div>
                })}
                {move || error.get().map(|message| view! {
                    <div class="alert alert-error">{message}</div>
                })}

                <form on:submit=handle_submit novalidate>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="email"
                            autofocus
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn-primary btn-block">"LOGIN"</button>
                </form>

                <p class="muted">"Demo credentials: admin@example.com / admin123"</p>
            </div>
        </div>
    }
}
