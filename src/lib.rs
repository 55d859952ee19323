//! Android edge-to-edge display control for Tauri apps.
//!
//! ```rust,ignore
//! tauri::Builder::default()
//!     .plugin(tauri_plugin_edge_to_edge::init())
//! ```
//!
//! The plugin reads `plugins.edge-to-edge` from `tauri.conf.json`
//! (`backgroundColor`, `statusBarColor`, `navigationBarColor`,
//! `disableEdgeToEdgeForGesture`) once at setup. Off Android every command
//! succeeds against an in-memory window.

mod commands;
mod error;
mod models;
mod services;

use std::sync::Mutex;

use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, Runtime};

pub use error::{Error, Result};
pub use models::{
    BarOptions, BarStyle, ConfigureOptions, EnableOptions, GestureNavigationOptions, Insets,
    StyleOptions, WindowInsetsSnapshot,
};
pub use services::color::Color;
pub use services::config::{EdgeToEdgeConfig, PluginConfig};
pub use services::platform::headless::HeadlessWindow;
pub use services::platform::{SystemBarsBehavior, SystemWindow};
pub use services::EdgeToEdge;

/// Emitted with the new [`Insets`] whenever the web view margins follow a
/// window insets change.
pub const INSETS_CHANGED_EVENT: &str = "edge-to-edge://insets-changed";

pub fn init<R: Runtime>() -> TauriPlugin<R, Option<PluginConfig>> {
    let mut loaded = false;
    Builder::<R, Option<PluginConfig>>::new("edge-to-edge")
        .invoke_handler(tauri::generate_handler![
            commands::enable,
            commands::disable,
            commands::get_insets,
            commands::set_background_color,
            commands::set_status_bar_color,
            commands::set_navigation_bar_color,
            commands::set_background_color_and_style,
            commands::set_style,
            commands::set_status_bar_style,
            commands::set_navigation_bar_style,
            commands::set_status_bar_appearance,
            commands::set_navigation_bar_appearance,
            commands::set_navigation_bar_contrast_enforced,
            commands::enter_immersive_mode,
            commands::exit_immersive_mode,
            commands::set_immersive_mode,
            commands::is_immersive_mode,
            commands::set_keyboard_animation,
            commands::configure,
            commands::configure_for_gesture_navigation,
            commands::force_transparent_navigation_bar,
            commands::check_gesture_navigation,
            commands::set_configuration,
        ])
        .setup(|app, api| {
            let raw = api.config().clone().unwrap_or_default();
            let config = EdgeToEdgeConfig::from_plugin_config(&raw);
            let window = services::platform::open_window()?;
            app.manage(Mutex::new(EdgeToEdge::new(window, config)));

            #[cfg(target_os = "android")]
            {
                let handle = app.clone();
                services::platform::android::set_insets_sink(Box::new(move |snapshot| {
                    commands::dispatch_window_insets(&handle, &snapshot);
                }));
            }

            Ok(())
        })
        .on_webview_ready(move |webview| {
            // Margins and the insets listener live on the web view, so the
            // first one to come up triggers the load.
            if std::mem::replace(&mut loaded, true) {
                return;
            }
            if let Err(e) = commands::load(webview.app_handle()) {
                log::error!("[EdgeToEdge] Failed to schedule load: {}", e);
            }
        })
        .build()
}
