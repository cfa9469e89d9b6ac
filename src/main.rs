use leptos::prelude::*;
use admin_dashboard_ui::app::App;
use admin_dashboard_ui::core::{logging, AppConfig};

fn main() {
    console_error_panic_hook::set_once();
    // Default level until the page config is read
    let _ = logging::init("info");

    let config = AppConfig::load();
    if let Err(e) = logging::init(&config.log_level) {
        log::warn!("{}; keeping the default level", e);
    }

    mount_to_body(move || view! { <App config=config /> })
}
