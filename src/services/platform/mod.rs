use crate::error::Result;
use crate::models::{Insets, WindowInsetsSnapshot};
use crate::services::color::Color;

#[cfg(target_os = "android")]
pub mod android;

pub mod headless;

/// `Build.VERSION_CODES` the window logic branches on.
pub mod sdk {
    pub const LOLLIPOP: i32 = 21;
    pub const M: i32 = 23;
    pub const O: i32 = 26;
    pub const P: i32 = 28;
    pub const Q: i32 = 29;
    pub const R: i32 = 30;
}

/// `View.SYSTEM_UI_FLAG_*` values used on releases without an insets controller.
pub mod ui_flags {
    pub const HIDE_NAVIGATION: i32 = 0x0000_0002;
    pub const FULLSCREEN: i32 = 0x0000_0004;
    pub const LIGHT_NAVIGATION_BAR: i32 = 0x0000_0010;
    pub const LAYOUT_STABLE: i32 = 0x0000_0100;
    pub const LAYOUT_HIDE_NAVIGATION: i32 = 0x0000_0200;
    pub const LAYOUT_FULLSCREEN: i32 = 0x0000_0400;
    pub const IMMERSIVE_STICKY: i32 = 0x0000_1000;
    pub const LIGHT_STATUS_BAR: i32 = 0x0000_2000;
}

/// `WindowInsetsController.BEHAVIOR_*`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemBarsBehavior {
    Default,
    ShowTransientBarsBySwipe,
}

impl SystemBarsBehavior {
    pub fn as_raw(self) -> i32 {
        match self {
            SystemBarsBehavior::Default => 1,
            SystemBarsBehavior::ShowTransientBarsBySwipe => 2,
        }
    }
}

/// Primitive window operations of the hosting activity.
///
/// Implementations perform exactly one platform call per method and leave
/// API-level gating to the caller, except where the platform offers two
/// mechanisms for the same effect (insets controller vs. UI flags).
pub trait SystemWindow: Send {
    fn sdk_int(&self) -> i32;

    fn set_decor_fits_system_windows(&mut self, fits: bool) -> Result<()>;
    fn system_ui_visibility(&mut self) -> Result<i32>;
    fn set_system_ui_visibility(&mut self, flags: i32) -> Result<()>;

    /// `None` until the view is attached and has received insets.
    fn root_window_insets(&mut self) -> Result<Option<WindowInsetsSnapshot>>;
    fn webview_margins(&mut self) -> Result<Insets>;
    fn set_webview_margins(&mut self, margins: Insets) -> Result<()>;
    fn set_insets_listener(&mut self, attached: bool) -> Result<()>;
    fn set_keyboard_animation_callback(&mut self, attached: bool) -> Result<()>;

    fn set_status_bar_color(&mut self, color: Color) -> Result<()>;
    fn set_navigation_bar_color(&mut self, color: Color) -> Result<()>;
    fn set_navigation_bar_contrast_enforced(&mut self, enforce: bool) -> Result<()>;
    fn set_background_color(&mut self, color: Color) -> Result<()>;

    /// Returns false when no insets controller is available.
    fn set_appearance_light_status_bars(&mut self, light: bool) -> Result<bool>;
    fn set_appearance_light_navigation_bars(&mut self, light: bool) -> Result<bool>;
    fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior) -> Result<bool>;
    fn hide_system_bars(&mut self) -> Result<bool>;
    fn show_system_bars(&mut self) -> Result<bool>;
}

/// Work for the UI thread that owns the window and its views.
pub type UiTask = Box<dyn FnOnce() + Send>;

#[cfg(target_os = "android")]
pub use android::run_on_ui_thread;

/// Without a platform UI thread the task runs in place.
#[cfg(not(target_os = "android"))]
pub fn run_on_ui_thread(task: UiTask) -> Result<()> {
    task();
    Ok(())
}

#[cfg(target_os = "android")]
pub type PlatformWindow = android::AndroidWindow;

#[cfg(not(target_os = "android"))]
pub type PlatformWindow = headless::HeadlessWindow;

/// Binds to the window of the current activity.
#[cfg(target_os = "android")]
pub fn open_window() -> Result<PlatformWindow> {
    android::AndroidWindow::from_context()
}

/// Off-device there is no system UI; the headless window keeps the state so
/// frontends can still call every command during desktop development.
#[cfg(not(target_os = "android"))]
pub fn open_window() -> Result<PlatformWindow> {
    Ok(headless::HeadlessWindow::default())
}
