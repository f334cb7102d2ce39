//! AutoSearch Desktop: Dioxus demo hosting one filterable search input.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod search;
mod state;

use app::App;
use state::DemoState;

/// Pre-runtime storage, loaded before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<DemoState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("autosearch=info".parse().expect("static directive")),
        )
        .with_target(false)
        .init();

    let initial_state = DemoState::from_cwd();
    tracing::info!(
        items = initial_state.config.items.len(),
        label = initial_state.config.label.as_str(),
        "Starting AutoSearch demo"
    );
    if let Ok(mut slot) = INITIAL_STATE.lock() {
        *slot = Some(initial_state);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((245, 245, 245, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("AutoSearch")
                            .with_inner_size(LogicalSize::new(640.0, 480.0))
                            .with_min_inner_size(LogicalSize::new(320.0, 240.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
