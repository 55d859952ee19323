use super::{sdk, SystemBarsBehavior, SystemWindow};
use crate::error::{Error, Result};
use crate::models::{Insets, WindowInsetsSnapshot};
use crate::services::color::Color;

/// A window with no system UI behind it. Every call lands in a field so the
/// resulting state can be inspected.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    pub sdk_int: i32,
    pub has_insets_controller: bool,
    /// Whether the web view is in the content frame yet.
    pub webview_attached: bool,
    pub root_insets: Option<WindowInsetsSnapshot>,
    pub decor_fits_system_windows: bool,
    pub system_ui_flags: i32,
    pub margins: Insets,
    pub insets_listener: bool,
    pub keyboard_animation: bool,
    pub status_bar_color: Option<Color>,
    pub navigation_bar_color: Option<Color>,
    pub navigation_bar_contrast_enforced: Option<bool>,
    pub background_color: Option<Color>,
    pub light_status_bars: bool,
    pub light_navigation_bars: bool,
    pub system_bars_behavior: Option<SystemBarsBehavior>,
    pub system_bars_hidden: bool,
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new(35)
    }
}

impl HeadlessWindow {
    pub fn new(sdk_int: i32) -> Self {
        Self {
            sdk_int,
            has_insets_controller: true,
            webview_attached: true,
            root_insets: None,
            decor_fits_system_windows: true,
            system_ui_flags: 0,
            margins: Insets::ZERO,
            insets_listener: false,
            keyboard_animation: false,
            status_bar_color: None,
            navigation_bar_color: None,
            navigation_bar_contrast_enforced: None,
            background_color: None,
            light_status_bars: false,
            light_navigation_bars: false,
            system_bars_behavior: None,
            system_bars_hidden: false,
        }
    }

    pub fn with_insets(mut self, insets: WindowInsetsSnapshot) -> Self {
        self.root_insets = Some(insets);
        self
    }

    fn webview(&self) -> Result<()> {
        if self.webview_attached {
            Ok(())
        } else {
            Err(Error::Platform("Web view not attached".into()))
        }
    }
}

impl SystemWindow for HeadlessWindow {
    fn sdk_int(&self) -> i32 {
        self.sdk_int
    }

    fn set_decor_fits_system_windows(&mut self, fits: bool) -> Result<()> {
        self.decor_fits_system_windows = fits;
        Ok(())
    }

    fn system_ui_visibility(&mut self) -> Result<i32> {
        Ok(self.system_ui_flags)
    }

    fn set_system_ui_visibility(&mut self, flags: i32) -> Result<()> {
        self.system_ui_flags = flags;
        Ok(())
    }

    fn root_window_insets(&mut self) -> Result<Option<WindowInsetsSnapshot>> {
        if self.sdk_int < sdk::M {
            return Ok(None);
        }
        self.webview()?;
        Ok(self.root_insets)
    }

    fn webview_margins(&mut self) -> Result<Insets> {
        self.webview()?;
        Ok(self.margins)
    }

    fn set_webview_margins(&mut self, margins: Insets) -> Result<()> {
        self.webview()?;
        self.margins = margins;
        Ok(())
    }

    fn set_insets_listener(&mut self, attached: bool) -> Result<()> {
        self.webview()?;
        self.insets_listener = attached;
        Ok(())
    }

    fn set_keyboard_animation_callback(&mut self, attached: bool) -> Result<()> {
        self.webview()?;
        self.keyboard_animation = attached;
        Ok(())
    }

    fn set_status_bar_color(&mut self, color: Color) -> Result<()> {
        self.status_bar_color = Some(color);
        Ok(())
    }

    fn set_navigation_bar_color(&mut self, color: Color) -> Result<()> {
        self.navigation_bar_color = Some(color);
        Ok(())
    }

    fn set_navigation_bar_contrast_enforced(&mut self, enforce: bool) -> Result<()> {
        self.navigation_bar_contrast_enforced = Some(enforce);
        Ok(())
    }

    fn set_background_color(&mut self, color: Color) -> Result<()> {
        self.background_color = Some(color);
        Ok(())
    }

    fn set_appearance_light_status_bars(&mut self, light: bool) -> Result<bool> {
        if !self.has_insets_controller {
            return Ok(false);
        }
        self.light_status_bars = light;
        Ok(true)
    }

    fn set_appearance_light_navigation_bars(&mut self, light: bool) -> Result<bool> {
        if !self.has_insets_controller {
            return Ok(false);
        }
        self.light_navigation_bars = light;
        Ok(true)
    }

    fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior) -> Result<bool> {
        if !self.has_insets_controller {
            return Ok(false);
        }
        self.system_bars_behavior = Some(behavior);
        Ok(true)
    }

    fn hide_system_bars(&mut self) -> Result<bool> {
        if !self.has_insets_controller {
            return Ok(false);
        }
        self.system_bars_hidden = true;
        Ok(true)
    }

    fn show_system_bars(&mut self) -> Result<bool> {
        if !self.has_insets_controller {
            return Ok(false);
        }
        self.system_bars_hidden = false;
        Ok(true)
    }
}
