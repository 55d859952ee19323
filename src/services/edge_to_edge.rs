use log::{debug, info, warn};

use crate::error::{Error, Result, ERROR_COLOR_MISSING};
use crate::models::{
    BarOptions, BarStyle, ConfigureOptions, EnableOptions, GestureNavigationOptions, Insets,
    WindowInsetsSnapshot,
};
use crate::services::color::{parse_optional, Color};
use crate::services::config::EdgeToEdgeConfig;
use crate::services::immersive::ImmersiveMode;
use crate::services::insets::{is_gesture_navigation, resolve_margins};
use crate::services::platform::{sdk, ui_flags, SystemBarsBehavior, SystemWindow};

const EDGE_TO_EDGE_FLAGS: i32 =
    ui_flags::LAYOUT_STABLE | ui_flags::LAYOUT_FULLSCREEN | ui_flags::LAYOUT_HIDE_NAVIGATION;

/// Edge-to-edge controller for one activity window.
///
/// Every method must run on the UI thread of that activity.
pub struct EdgeToEdge<W: SystemWindow> {
    window: W,
    config: EdgeToEdgeConfig,
    immersive: ImmersiveMode,
    /// Set by `enable`/`load`, cleared by `disable`.
    requested: bool,
    /// Whether margins follow the window insets.
    listening: bool,
}

impl<W: SystemWindow> EdgeToEdge<W> {
    pub fn new(window: W, config: EdgeToEdgeConfig) -> Self {
        Self {
            window,
            config,
            immersive: ImmersiveMode::new(),
            requested: false,
            listening: false,
        }
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn config(&self) -> &EdgeToEdgeConfig {
        &self.config
    }

    pub fn load(&mut self) -> Result<()> {
        info!(
            "[EdgeToEdge] Loading on API {} (disable for gesture: {})",
            self.window.sdk_int(),
            self.config.disable_edge_to_edge_for_gesture
        );
        self.enable(&EnableOptions::default())?;
        self.paint_config_colors()
    }

    pub fn enable(&mut self, options: &EnableOptions) -> Result<()> {
        let status_color = bar_color(options.status_bar.as_ref())?;
        let navigation_color = bar_color(options.navigation_bar.as_ref())?;

        if self.config.disable_edge_to_edge_for_gesture && self.is_gesture_navigation()? {
            info!("[EdgeToEdge] Gesture navigation detected, keeping content inside system bars");
            self.fit_system_windows()?;
            self.remove_insets()?;
        } else {
            self.enable_edge_to_edge()?;
            self.apply_insets()?;
        }
        self.requested = true;

        if let Some(color) = status_color {
            self.config.status_bar_color = color;
            self.paint_status_bar(color)?;
        }
        if let Some(color) = navigation_color {
            self.config.navigation_bar_color = color;
            self.paint_navigation_bar(color)?;
        }
        if let Some(style) = options.status_bar.as_ref().and_then(|bar| bar.style) {
            self.set_status_bar_style(style)?;
        }
        if let Some(style) = options.navigation_bar.as_ref().and_then(|bar| bar.style) {
            self.set_navigation_bar_style(style)?;
        }
        Ok(())
    }

    pub fn disable(&mut self) -> Result<()> {
        info!("[EdgeToEdge] Disabling");
        // The decor stays edge-to-edge; clearing the margins is what the
        // web view observes.
        self.remove_insets()?;
        self.requested = false;
        Ok(())
    }

    pub fn get_insets(&mut self) -> Result<Insets> {
        self.window.webview_margins()
    }

    /// Handles a window insets dispatch. Returns the margins applied, or
    /// `None` when edge-to-edge is not following insets.
    pub fn on_window_insets(&mut self, snapshot: &WindowInsetsSnapshot) -> Result<Option<Insets>> {
        if !self.listening {
            return Ok(None);
        }
        let margins = resolve_margins(snapshot);
        debug!("[EdgeToEdge] Applying margins {:?}", margins);
        self.window.set_webview_margins(margins)?;
        Ok(Some(margins))
    }

    pub fn set_background_color(
        &mut self,
        color: Option<&str>,
        status_bar_color: Option<&str>,
        navigation_bar_color: Option<&str>,
    ) -> Result<()> {
        if color.is_none() && status_bar_color.is_none() && navigation_bar_color.is_none() {
            return Err(Error::MissingParameter(ERROR_COLOR_MISSING));
        }
        let color = parse_optional(color)?;
        let status = parse_optional(status_bar_color)?;
        let navigation = parse_optional(navigation_bar_color)?;

        if status.is_some() || navigation.is_some() {
            if let Some(status) = status {
                self.config.status_bar_color = status;
                self.paint_status_bar(status)?;
            }
            if let Some(navigation) = navigation {
                self.config.navigation_bar_color = navigation;
                self.paint_navigation_bar(navigation)?;
            }
        } else if let Some(color) = color {
            self.config.background_color = color;
            self.config.status_bar_color = color;
            self.config.navigation_bar_color = color;
            self.window.set_background_color(color)?;
            self.paint_status_bar(color)?;
            self.paint_navigation_bar(color)?;
        }
        Ok(())
    }

    pub fn set_status_bar_color(&mut self, color: &str) -> Result<()> {
        let color = Color::parse(color)?;
        self.config.status_bar_color = color;
        self.paint_status_bar(color)
    }

    pub fn set_navigation_bar_color(&mut self, color: &str) -> Result<()> {
        let color = Color::parse(color)?;
        self.config.navigation_bar_color = color;
        self.paint_navigation_bar(color)
    }

    pub fn set_background_color_and_style(&mut self, style: BarStyle, color: &str) -> Result<()> {
        let color = Color::parse(color)?;
        self.config.status_bar_color = color;
        self.config.navigation_bar_color = color;
        self.paint_status_bar(color)?;
        self.paint_navigation_bar(color)?;
        self.set_status_bar_style(style)?;
        self.set_navigation_bar_style(style)
    }

    pub fn set_style(
        &mut self,
        status_bar: Option<BarStyle>,
        navigation_bar: Option<BarStyle>,
    ) -> Result<()> {
        if let Some(style) = status_bar {
            self.set_status_bar_style(style)?;
        }
        if let Some(style) = navigation_bar {
            self.set_navigation_bar_style(style)?;
        }
        Ok(())
    }

    /// `Dark` style puts dark icons on the bar.
    pub fn set_status_bar_style(&mut self, style: BarStyle) -> Result<()> {
        self.config.status_bar_style = style;
        self.apply_light_status_bars(style.is_dark())
    }

    pub fn set_navigation_bar_style(&mut self, style: BarStyle) -> Result<()> {
        self.config.navigation_bar_style = style;
        self.apply_light_navigation_bars(style.is_dark())
    }

    /// `light_icons` asks for light icons, i.e. a dark bar background.
    pub fn set_status_bar_appearance(&mut self, light_icons: bool) -> Result<()> {
        self.set_status_bar_style(style_for_icons(light_icons))
    }

    pub fn set_navigation_bar_appearance(&mut self, light_icons: bool) -> Result<()> {
        self.set_navigation_bar_style(style_for_icons(light_icons))
    }

    pub fn set_navigation_bar_contrast_enforced(&mut self, enforce: bool) -> Result<()> {
        if self.window.sdk_int() >= sdk::Q {
            self.window.set_navigation_bar_contrast_enforced(enforce)?;
        }
        Ok(())
    }

    pub fn enter_immersive_mode(&mut self) -> Result<()> {
        if !self.window.hide_system_bars()? {
            warn!("[EdgeToEdge] No insets controller, cannot hide system bars");
            return Ok(());
        }
        if self.immersive.set_enabled(true) {
            info!("[EdgeToEdge] Entered immersive mode");
        }
        Ok(())
    }

    pub fn exit_immersive_mode(&mut self) -> Result<()> {
        if !self.window.show_system_bars()? {
            warn!("[EdgeToEdge] No insets controller, cannot show system bars");
            return Ok(());
        }
        if self.immersive.set_enabled(false) {
            info!("[EdgeToEdge] Exited immersive mode");
        }
        Ok(())
    }

    pub fn set_immersive_mode(&mut self, enter: bool) -> Result<()> {
        if enter {
            self.enter_immersive_mode()
        } else {
            self.exit_immersive_mode()
        }
    }

    pub fn is_immersive_mode(&self) -> bool {
        self.immersive.is_enabled()
    }

    pub fn set_keyboard_animation(&mut self, enabled: bool) -> Result<()> {
        debug!("[EdgeToEdge] Keyboard animation callback: {}", enabled);
        self.window.set_keyboard_animation_callback(enabled)
    }

    pub fn configure(&mut self, options: &ConfigureOptions) -> Result<()> {
        let status = parse_optional(options.status_bar_color.as_deref())?
            .unwrap_or(self.config.status_bar_color);
        let navigation = parse_optional(options.navigation_bar_color.as_deref())?
            .unwrap_or(self.config.navigation_bar_color);

        self.set_status_bar_appearance(options.light_status_bar)?;
        self.set_navigation_bar_appearance(options.light_navigation_bar)?;
        self.config.status_bar_color = status;
        self.paint_status_bar(status)?;

        self.config.navigation_bar_color = navigation;
        if self.is_gesture_navigation()? {
            debug!("[EdgeToEdge] Gesture navigation, forcing transparent navigation bar");
            self.paint_navigation_bar(Color::TRANSPARENT)?;
            self.set_navigation_bar_contrast_enforced(false)?;
        } else {
            self.paint_navigation_bar(navigation)?;
            self.set_navigation_bar_contrast_enforced(options.enforce_contrast)?;
        }

        if let Some(immersive) = options.immersive {
            self.set_immersive_mode(immersive)?;
        }
        Ok(())
    }

    /// Returns whether gesture navigation was detected.
    pub fn configure_for_gesture_navigation(
        &mut self,
        options: &GestureNavigationOptions,
    ) -> Result<bool> {
        if let Some(color) = parse_optional(options.status_bar_color.as_deref())? {
            self.config.status_bar_color = color;
            self.paint_status_bar(color)?;
        }
        if let Some(light_icons) = options.light_status_bar {
            self.set_status_bar_appearance(light_icons)?;
        }
        if let Some(light_icons) = options.light_navigation_bar {
            self.set_navigation_bar_appearance(light_icons)?;
        }

        let gesture = self.is_gesture_navigation()?;
        self.force_transparent_navigation_bar()?;
        self.set_navigation_bar_contrast_enforced(false)?;
        Ok(gesture)
    }

    /// For launchers that keep painting a scrim behind gesture navigation.
    pub fn force_transparent_navigation_bar(&mut self) -> Result<()> {
        let sdk_int = self.window.sdk_int();
        if sdk_int < sdk::LOLLIPOP {
            return Ok(());
        }
        self.window.set_navigation_bar_color(Color::TRANSPARENT)?;
        if sdk_int >= sdk::Q {
            self.window.set_navigation_bar_contrast_enforced(false)?;
        }
        if sdk_int >= sdk::R {
            self.window
                .set_system_bars_behavior(SystemBarsBehavior::ShowTransientBarsBySwipe)?;
        }
        let flags = self.window.system_ui_visibility()?;
        self.window.set_system_ui_visibility(
            flags | ui_flags::LAYOUT_HIDE_NAVIGATION | ui_flags::LAYOUT_STABLE,
        )
    }

    pub fn check_gesture_navigation(&mut self) -> Result<bool> {
        self.is_gesture_navigation()
    }

    pub fn set_configuration(&mut self, disable_edge_to_edge_for_gesture: bool) -> Result<()> {
        info!(
            "[EdgeToEdge] disableEdgeToEdgeForGesture = {}",
            disable_edge_to_edge_for_gesture
        );
        self.config.disable_edge_to_edge_for_gesture = disable_edge_to_edge_for_gesture;
        if self.requested {
            self.enable(&EnableOptions::default())?;
        }
        Ok(())
    }

    fn is_gesture_navigation(&mut self) -> Result<bool> {
        let sdk_int = self.window.sdk_int();
        if sdk_int < sdk::Q {
            return Ok(false);
        }
        let snapshot = self.window.root_window_insets()?;
        Ok(is_gesture_navigation(sdk_int, snapshot.as_ref()))
    }

    fn enable_edge_to_edge(&mut self) -> Result<()> {
        self.window.set_decor_fits_system_windows(false)?;
        if self.window.sdk_int() < sdk::R {
            self.window.set_system_ui_visibility(EDGE_TO_EDGE_FLAGS)?;
        }
        Ok(())
    }

    fn fit_system_windows(&mut self) -> Result<()> {
        self.window.set_decor_fits_system_windows(true)?;
        if self.window.sdk_int() < sdk::R {
            let flags = self.window.system_ui_visibility()?;
            self.window
                .set_system_ui_visibility(flags & !EDGE_TO_EDGE_FLAGS)?;
        }
        Ok(())
    }

    fn apply_insets(&mut self) -> Result<()> {
        if let Some(snapshot) = self.window.root_window_insets()? {
            let margins = resolve_margins(&snapshot);
            debug!("[EdgeToEdge] Initial margins {:?}", margins);
            self.window.set_webview_margins(margins)?;
        }
        self.window.set_insets_listener(true)?;
        self.listening = true;
        Ok(())
    }

    fn remove_insets(&mut self) -> Result<()> {
        self.window.set_webview_margins(Insets::ZERO)?;
        self.window.set_insets_listener(false)?;
        self.listening = false;
        Ok(())
    }

    fn paint_config_colors(&mut self) -> Result<()> {
        self.window.set_background_color(self.config.background_color)?;
        self.paint_status_bar(self.config.status_bar_color)?;
        self.paint_navigation_bar(self.config.navigation_bar_color)
    }

    fn paint_status_bar(&mut self, color: Color) -> Result<()> {
        if self.window.sdk_int() >= sdk::LOLLIPOP {
            debug!("[EdgeToEdge] Status bar color {}", color);
            self.window.set_status_bar_color(color)?;
        }
        Ok(())
    }

    fn paint_navigation_bar(&mut self, color: Color) -> Result<()> {
        let sdk_int = self.window.sdk_int();
        if sdk_int < sdk::LOLLIPOP {
            return Ok(());
        }
        debug!("[EdgeToEdge] Navigation bar color {}", color);
        self.window.set_navigation_bar_color(color)?;
        // Contrast enforcement would otherwise draw a scrim over transparent colors.
        if sdk_int >= sdk::Q {
            self.window.set_navigation_bar_contrast_enforced(false)?;
            if sdk_int >= sdk::R {
                self.window
                    .set_system_bars_behavior(SystemBarsBehavior::ShowTransientBarsBySwipe)?;
            }
        }
        Ok(())
    }

    fn apply_light_status_bars(&mut self, light_bars: bool) -> Result<()> {
        if self.window.sdk_int() < sdk::M {
            return Ok(());
        }
        if !self.window.set_appearance_light_status_bars(light_bars)? {
            warn!("[EdgeToEdge] No insets controller for status bar appearance");
        }
        Ok(())
    }

    fn apply_light_navigation_bars(&mut self, light_bars: bool) -> Result<()> {
        if self.window.sdk_int() < sdk::O {
            return Ok(());
        }
        if !self.window.set_appearance_light_navigation_bars(light_bars)? {
            warn!("[EdgeToEdge] No insets controller for navigation bar appearance");
        }
        Ok(())
    }
}

fn bar_color(options: Option<&BarOptions>) -> Result<Option<Color>> {
    parse_optional(options.and_then(|bar| bar.color.as_deref()))
}

fn style_for_icons(light_icons: bool) -> BarStyle {
    if light_icons {
        BarStyle::Light
    } else {
        BarStyle::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::platform::headless::HeadlessWindow;

    fn button_insets() -> WindowInsetsSnapshot {
        WindowInsetsSnapshot {
            system_bars: Insets::new(84, 0, 0, 126),
            ime: Insets::ZERO,
            ime_visible: false,
            navigation_bars: Insets::new(0, 0, 0, 126),
        }
    }

    fn gesture_insets() -> WindowInsetsSnapshot {
        WindowInsetsSnapshot {
            system_bars: Insets::new(84, 0, 0, 0),
            ime: Insets::ZERO,
            ime_visible: false,
            navigation_bars: Insets::ZERO,
        }
    }

    fn loaded(window: HeadlessWindow) -> EdgeToEdge<HeadlessWindow> {
        let mut edge = EdgeToEdge::new(window, EdgeToEdgeConfig::default());
        edge.load().expect("load");
        edge
    }

    #[test]
    fn load_applies_initial_insets_and_config_colors() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(button_insets()));

        assert_eq!(edge.get_insets().expect("insets"), Insets::new(84, 0, 0, 126));
        let window = edge.window();
        assert!(!window.decor_fits_system_windows);
        assert!(window.insets_listener);
        assert_eq!(window.status_bar_color, Some(Color::WHITE));
        assert_eq!(window.navigation_bar_color, Some(Color::WHITE));
        assert_eq!(window.background_color, Some(Color::WHITE));
    }

    #[test]
    fn load_needs_the_web_view_attached() {
        let mut window = HeadlessWindow::new(34).with_insets(button_insets());
        window.webview_attached = false;
        let mut early = EdgeToEdge::new(window, EdgeToEdgeConfig::default());

        let err = early.load().unwrap_err();
        assert_eq!(err.to_string(), "Web view not attached");
        assert!(!early.window().insets_listener);

        // Without a completed load the gesture flag has nothing to re-apply.
        early.window.webview_attached = true;
        early.set_configuration(false).expect("set configuration");
        assert!(!early.window().insets_listener);

        let mut ready = loaded(HeadlessWindow::new(34).with_insets(button_insets()));
        assert!(ready.window().insets_listener);
        assert_eq!(ready.get_insets().expect("insets"), Insets::new(84, 0, 0, 126));
    }

    #[test]
    fn pre_r_releases_use_layout_flags() {
        let edge = loaded(HeadlessWindow::new(28).with_insets(button_insets()));
        assert_eq!(edge.window().system_ui_flags, EDGE_TO_EDGE_FLAGS);
    }

    #[test]
    fn get_insets_reports_latest_callback() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(button_insets()));

        let keyboard = WindowInsetsSnapshot {
            ime: Insets::new(0, 0, 0, 900),
            ime_visible: true,
            ..button_insets()
        };
        let applied = edge.on_window_insets(&keyboard).expect("callback");
        assert_eq!(applied, Some(Insets::new(84, 0, 0, 900)));
        assert_eq!(edge.get_insets().expect("insets"), Insets::new(84, 0, 0, 900));

        edge.on_window_insets(&button_insets()).expect("callback");
        assert_eq!(edge.get_insets().expect("insets"), Insets::new(84, 0, 0, 126));
    }

    #[test]
    fn callbacks_are_ignored_while_disabled() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(button_insets()));
        edge.disable().expect("disable");

        let applied = edge.on_window_insets(&button_insets()).expect("callback");
        assert_eq!(applied, None);
        assert_eq!(edge.get_insets().expect("insets"), Insets::ZERO);
    }

    #[test]
    fn enable_and_disable_are_idempotent() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(button_insets()));

        edge.enable(&EnableOptions::default()).expect("enable");
        let first = edge.get_insets().expect("insets");
        edge.enable(&EnableOptions::default()).expect("enable");
        assert_eq!(edge.get_insets().expect("insets"), first);

        edge.disable().expect("disable");
        edge.disable().expect("disable");
        assert_eq!(edge.get_insets().expect("insets"), Insets::ZERO);
        assert!(!edge.window().insets_listener);

        edge.enable(&EnableOptions::default()).expect("enable");
        assert_eq!(edge.get_insets().expect("insets"), first);
    }

    #[test]
    fn enable_applies_bar_overrides() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(button_insets()));
        let options = EnableOptions {
            status_bar: Some(BarOptions {
                style: Some(BarStyle::Dark),
                color: Some("#ffffff".into()),
            }),
            navigation_bar: Some(BarOptions {
                style: None,
                color: Some("#000000".into()),
            }),
        };
        edge.enable(&options).expect("enable");

        let window = edge.window();
        assert!(window.light_status_bars);
        assert_eq!(window.navigation_bar_color, Some(Color::BLACK));
        assert_eq!(edge.config().navigation_bar_color, Color::BLACK);
    }

    #[test]
    fn malformed_status_bar_color_is_rejected_without_side_effects() {
        let mut edge = loaded(HeadlessWindow::new(34));
        let err = edge.set_status_bar_color("#12345").unwrap_err();
        assert_eq!(err.to_string(), "Invalid color: #12345");
        assert_eq!(edge.window().status_bar_color, Some(Color::WHITE));
    }

    #[test]
    fn navigation_bar_color_applies_argb_and_relaxes_contrast() {
        let mut edge = loaded(HeadlessWindow::new(34));
        edge.set_navigation_bar_contrast_enforced(true)
            .expect("contrast");
        edge.set_navigation_bar_color("#80112233").expect("color");

        let window = edge.window();
        assert_eq!(window.navigation_bar_color, Some(Color::from_argb(0x8011_2233)));
        assert_eq!(window.navigation_bar_contrast_enforced, Some(false));
        assert_eq!(
            window.system_bars_behavior,
            Some(SystemBarsBehavior::ShowTransientBarsBySwipe)
        );
    }

    #[test]
    fn background_color_requires_a_value() {
        let mut edge = loaded(HeadlessWindow::new(34));
        let err = edge.set_background_color(None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "color must be provided.");
    }

    #[test]
    fn background_color_paints_both_bars() {
        let mut edge = loaded(HeadlessWindow::new(34));
        edge.set_background_color(Some("#101010"), None, None)
            .expect("color");

        let expected = Some(Color::from_argb(0xFF10_1010));
        let window = edge.window();
        assert_eq!(window.background_color, expected);
        assert_eq!(window.status_bar_color, expected);
        assert_eq!(window.navigation_bar_color, expected);
    }

    #[test]
    fn specific_bar_colors_override_shared_color() {
        let mut edge = loaded(HeadlessWindow::new(34));
        edge.set_background_color(Some("#101010"), Some("red"), None)
            .expect("color");

        let window = edge.window();
        assert_eq!(window.status_bar_color, Some(Color::from_argb(0xFFFF_0000)));
        assert_eq!(window.navigation_bar_color, Some(Color::WHITE));
        assert_eq!(window.background_color, Some(Color::WHITE));
    }

    #[test]
    fn background_color_is_all_or_nothing() {
        let mut edge = loaded(HeadlessWindow::new(34));
        let err = edge
            .set_background_color(None, Some("#000000"), Some("#nope"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidColor(ref value) if value == "#nope"));
        assert_eq!(edge.window().status_bar_color, Some(Color::WHITE));
    }

    #[test]
    fn styles_map_to_light_appearance_flags() {
        let mut edge = loaded(HeadlessWindow::new(34));
        edge.set_style(Some(BarStyle::Dark), Some(BarStyle::Light))
            .expect("style");
        assert!(edge.window().light_status_bars);
        assert!(!edge.window().light_navigation_bars);

        edge.set_status_bar_appearance(true).expect("appearance");
        assert!(!edge.window().light_status_bars);
        assert_eq!(edge.config().status_bar_style, BarStyle::Light);
    }

    #[test]
    fn navigation_appearance_needs_oreo() {
        let mut edge = loaded(HeadlessWindow::new(24));
        edge.set_navigation_bar_style(BarStyle::Dark).expect("style");
        edge.set_status_bar_style(BarStyle::Dark).expect("style");
        assert!(!edge.window().light_navigation_bars);
        assert!(edge.window().light_status_bars);
    }

    #[test]
    fn background_color_and_style_sets_both_bars() {
        let mut edge = loaded(HeadlessWindow::new(34));
        edge.set_background_color_and_style(BarStyle::Dark, "#eeeeee")
            .expect("style");
        let window = edge.window();
        let expected = Some(Color::from_argb(0xFFEE_EEEE));
        assert_eq!(window.status_bar_color, expected);
        assert_eq!(window.navigation_bar_color, expected);
        assert!(window.light_status_bars && window.light_navigation_bars);
    }

    #[test]
    fn configure_forces_transparency_under_gesture_navigation() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(gesture_insets()));
        let options = ConfigureOptions {
            navigation_bar_color: Some("#ff0000".into()),
            enforce_contrast: true,
            ..ConfigureOptions::default()
        };
        edge.configure(&options).expect("configure");

        let window = edge.window();
        assert_eq!(window.navigation_bar_color, Some(Color::TRANSPARENT));
        assert_eq!(window.navigation_bar_contrast_enforced, Some(false));
    }

    #[test]
    fn configure_uses_requested_colors_with_button_navigation() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(button_insets()));
        let options = ConfigureOptions {
            light_status_bar: true,
            status_bar_color: Some("#000000".into()),
            navigation_bar_color: Some("#ff0000".into()),
            enforce_contrast: true,
            immersive: Some(true),
            ..ConfigureOptions::default()
        };
        edge.configure(&options).expect("configure");

        let window = edge.window();
        assert_eq!(window.status_bar_color, Some(Color::BLACK));
        assert_eq!(window.navigation_bar_color, Some(Color::from_argb(0xFFFF_0000)));
        assert_eq!(window.navigation_bar_contrast_enforced, Some(true));
        assert!(!window.light_status_bars);
        assert!(window.light_navigation_bars);
        assert!(edge.is_immersive_mode());
    }

    #[test]
    fn configure_rejects_bad_color_before_touching_window() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(button_insets()));
        let options = ConfigureOptions {
            light_status_bar: true,
            navigation_bar_color: Some("#zz".into()),
            ..ConfigureOptions::default()
        };
        assert!(edge.configure(&options).is_err());
        assert!(!edge.window().light_status_bars);
    }

    #[test]
    fn immersive_mode_round_trip() {
        let mut edge = loaded(HeadlessWindow::new(34));
        edge.enter_immersive_mode().expect("enter");
        assert!(edge.is_immersive_mode());
        assert!(edge.window().system_bars_hidden);

        edge.set_immersive_mode(false).expect("exit");
        assert!(!edge.is_immersive_mode());
        assert!(!edge.window().system_bars_hidden);
    }

    #[test]
    fn immersive_flag_unchanged_without_controller() {
        let mut window = HeadlessWindow::new(34);
        window.has_insets_controller = false;
        let mut edge = loaded(window);
        edge.enter_immersive_mode().expect("enter");
        assert!(!edge.is_immersive_mode());
    }

    #[test]
    fn force_transparent_navigation_bar_sets_layout_flags() {
        let mut edge = loaded(HeadlessWindow::new(34));
        edge.force_transparent_navigation_bar().expect("force");

        let window = edge.window();
        assert_eq!(window.navigation_bar_color, Some(Color::TRANSPARENT));
        assert_eq!(window.navigation_bar_contrast_enforced, Some(false));
        let expected = ui_flags::LAYOUT_HIDE_NAVIGATION | ui_flags::LAYOUT_STABLE;
        assert_eq!(window.system_ui_flags & expected, expected);
    }

    #[test]
    fn enable_keeps_gesture_navigation_transparency() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(gesture_insets()));
        let options = ConfigureOptions {
            navigation_bar_color: Some("#ff0000".into()),
            ..ConfigureOptions::default()
        };
        edge.configure(&options).expect("configure");

        edge.set_configuration(false).expect("set configuration");
        edge.enable(&EnableOptions::default()).expect("enable");
        assert_eq!(edge.window().navigation_bar_color, Some(Color::TRANSPARENT));
    }

    #[test]
    fn enable_keeps_forced_transparent_navigation_bar() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(button_insets()));
        edge.force_transparent_navigation_bar().expect("force");
        edge.enable(&EnableOptions::default()).expect("enable");
        assert_eq!(edge.window().navigation_bar_color, Some(Color::TRANSPARENT));
    }

    #[test]
    fn configure_for_gesture_navigation_reports_detection() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(gesture_insets()));
        let options = GestureNavigationOptions {
            status_bar_color: Some("#222222".into()),
            light_status_bar: Some(false),
            light_navigation_bar: None,
        };
        assert!(edge.configure_for_gesture_navigation(&options).expect("configure"));
        assert_eq!(edge.window().navigation_bar_color, Some(Color::TRANSPARENT));
        assert!(edge.window().light_status_bars);

        let mut buttons = loaded(HeadlessWindow::new(34).with_insets(button_insets()));
        let detected = buttons
            .configure_for_gesture_navigation(&GestureNavigationOptions::default())
            .expect("configure");
        assert!(!detected);
    }

    #[test]
    fn check_gesture_navigation_needs_q() {
        let mut old = loaded(HeadlessWindow::new(28).with_insets(gesture_insets()));
        assert!(!old.check_gesture_navigation().expect("check"));

        let mut new = loaded(HeadlessWindow::new(29).with_insets(gesture_insets()));
        assert!(new.check_gesture_navigation().expect("check"));
    }

    #[test]
    fn gesture_flag_keeps_content_inside_bars() {
        let config = EdgeToEdgeConfig {
            disable_edge_to_edge_for_gesture: true,
            ..EdgeToEdgeConfig::default()
        };
        let mut edge =
            EdgeToEdge::new(HeadlessWindow::new(34).with_insets(gesture_insets()), config);
        edge.load().expect("load");

        assert!(edge.window().decor_fits_system_windows);
        assert!(!edge.window().insets_listener);
        assert_eq!(edge.get_insets().expect("insets"), Insets::ZERO);

        edge.set_configuration(false).expect("configure");
        assert!(!edge.window().decor_fits_system_windows);
        assert!(edge.window().insets_listener);
        assert_eq!(edge.get_insets().expect("insets"), Insets::new(84, 0, 0, 0));
    }

    #[test]
    fn set_configuration_does_not_enable_after_disable() {
        let mut edge = loaded(HeadlessWindow::new(34).with_insets(button_insets()));
        edge.disable().expect("disable");
        edge.set_configuration(true).expect("configure");
        assert!(!edge.window().insets_listener);
        assert!(edge.config().disable_edge_to_edge_for_gesture);
    }

    #[test]
    fn keyboard_animation_toggles_callback() {
        let mut edge = loaded(HeadlessWindow::new(34));
        edge.set_keyboard_animation(true).expect("enable");
        assert!(edge.window().keyboard_animation);
        edge.set_keyboard_animation(false).expect("disable");
        assert!(!edge.window().keyboard_animation);
    }
}
