use leptos::*;

use placemap::{load_config, App, ConfigError};

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    match load_config() {
        Ok(config) => {
            mount_to_body(move || view! { <App config /> });
        }
        Err(err) => {
            log::error!("Unable to load configuration: {err:#}");
            let error = format!("{err:#}");
            mount_to_body(move || view! { <ConfigError error /> });
        }
    }
}
